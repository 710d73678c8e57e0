use std::future::{ready, Ready};

use actix_session::{Session, SessionExt, SessionGetError, SessionInsertError};
use actix_web::{dev::Payload, FromRequest, HttpRequest};
use uuid::Uuid;

/// 只保存访客id，用于找回该访客的联系表单
pub struct TypedSession(Session);

impl TypedSession {
    const VISITOR_ID_KEY: &'static str = "visitor_id";

    pub fn get_visitor_id(&self) -> Result<Option<Uuid>, SessionGetError> {
        self.0.get(Self::VISITOR_ID_KEY)
    }

    pub fn insert_visitor_id(&self, visitor_id: Uuid) -> Result<(), SessionInsertError> {
        self.0.insert(Self::VISITOR_ID_KEY, visitor_id)
    }

    /// 首次提交时才分配访客id
    pub fn ensure_visitor_id(&self) -> Result<Uuid, anyhow::Error> {
        if let Some(visitor_id) = self.get_visitor_id()? {
            return Ok(visitor_id);
        }
        let visitor_id = Uuid::new_v4();
        self.insert_visitor_id(visitor_id)?;
        Ok(visitor_id)
    }

    pub fn purge(&self) {
        self.0.purge()
    }
}

impl FromRequest for TypedSession {
    type Error = <Session as FromRequest>::Error;
    type Future = Ready<Result<TypedSession, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Ok(TypedSession(req.get_session())))
    }
}
