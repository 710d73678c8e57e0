use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use uuid::Uuid;

use crate::contact_client::ContactClient;

use super::{lock, ContactForm, Schedule};

/// 每个访客一个表单实例，键为session中的访客id
pub struct ContactForms {
    forms: Mutex<HashMap<Uuid, Arc<ContactForm>>>,
    client: Arc<ContactClient>,
    schedule: Schedule,
}

impl ContactForms {
    pub fn new(client: ContactClient, schedule: Schedule) -> Self {
        Self {
            forms: Mutex::new(HashMap::new()),
            client: Arc::new(client),
            schedule,
        }
    }

    pub fn schedule(&self) -> Schedule {
        self.schedule
    }

    pub fn get(&self, visitor_id: Uuid) -> Option<Arc<ContactForm>> {
        lock(&self.forms).get(&visitor_id).cloned()
    }

    pub fn get_or_create(&self, visitor_id: Uuid) -> Arc<ContactForm> {
        let mut forms = lock(&self.forms);
        let form = forms.entry(visitor_id).or_insert_with(|| {
            tracing::info!(%visitor_id, "creating contact form for visitor.");
            Arc::new(ContactForm::new(Arc::clone(&self.client), self.schedule))
        });
        Arc::clone(form)
    }

    /// 立即销毁访客的表单，取消其未完成的定时转换
    pub fn forget(&self, visitor_id: Uuid) -> bool {
        let removed = lock(&self.forms).remove(&visitor_id);
        match removed {
            Some(form) => {
                form.teardown();
                true
            }
            None => false,
        }
    }

    /// 清理处于`idle`且超过`ttl`没有活动的表单，返回清理数量
    pub fn evict_idle(&self, ttl: Duration) -> usize {
        let mut forms = lock(&self.forms);
        let before = forms.len();
        forms.retain(|_, form| !form.is_idle_for(ttl));
        before - forms.len()
    }

    pub fn len(&self) -> usize {
        lock(&self.forms).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
