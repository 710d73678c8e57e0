use std::time::Duration;

use actix_web::{http::header::ContentType, web, HttpRequest, HttpResponse};
use actix_web_flash_messages::IncomingFlashMessages;
use askama::Template;

use crate::{
    contact_form::{ContactForms, Schedule},
    content::{self, ContactDetails, ExternalLink, Faq, Feature, NavLink, Pillar, Step},
    domain::{SubmissionRequest, SubmissionState, Theme},
    session_state::TypedSession,
    util::{collect_flash_messages, e500},
};

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate<'a> {
    title: &'a str,
    description: &'a str,
    site_name: &'a str,
    site_url: &'a str,
    theme: Theme,
    refresh_after: Option<u64>,
    nav_links: &'a [NavLink],
    features: &'a [Feature],
    steps: &'a [Step],
    privacy_summary: &'a str,
    pillars: &'a [Pillar],
    faqs: &'a [Faq],
    contact: &'a ContactDetails,
    social_links: &'a [ExternalLink],
    notices: Vec<String>,
    form: FormView,
}

impl<'a> HomeTemplate<'a> {
    fn new(theme: Theme, form: FormView, notices: Vec<String>, refresh_after: Option<u64>) -> Self {
        Self {
            title: content::PAGE_TITLE,
            description: content::PAGE_DESCRIPTION,
            site_name: content::SITE_NAME,
            site_url: content::SITE_URL,
            theme,
            refresh_after,
            nav_links: content::NAV_LINKS,
            features: content::FEATURES,
            steps: content::STEPS,
            privacy_summary: content::PRIVACY_SUMMARY,
            pillars: content::PILLARS,
            faqs: content::FAQS,
            contact: &content::CONTACT_DETAILS,
            social_links: content::SOCIAL_LINKS,
            notices,
            form,
        }
    }
}

/// 访客表单在页面上的快照
#[derive(Debug, Default)]
pub struct FormView {
    pub state: SubmissionState,
    pub request: SubmissionRequest,
}

impl FormView {
    pub fn is_submitted(&self) -> bool {
        self.state == SubmissionState::Submitted
    }

    pub fn locks_submit(&self) -> bool {
        self.state.locks_submit()
    }

    pub fn button_label(&self) -> &str {
        match self.state {
            SubmissionState::Submitting => "Sending...",
            SubmissionState::Success => "Sent!",
            SubmissionState::Idle | SubmissionState::Submitted => "Send Message",
        }
    }

    pub fn button_class(&self) -> &str {
        match self.state {
            SubmissionState::Submitting => "busy",
            SubmissionState::Success => "sent",
            SubmissionState::Idle | SubmissionState::Submitted => "",
        }
    }
}

/// 页面在非`idle`阶段自动刷新，以展示下一阶段
pub fn refresh_after(state: SubmissionState, schedule: Schedule) -> Option<u64> {
    let hold = match state {
        SubmissionState::Idle => return None,
        SubmissionState::Submitting => Duration::from_secs(1),
        SubmissionState::Success => schedule.success_hold,
        SubmissionState::Submitted => schedule.confirmation_hold,
    };
    let seconds = hold.as_millis().div_ceil(1000).max(1);
    Some(u64::try_from(seconds).unwrap_or(u64::MAX))
}

#[tracing::instrument(name = "渲染首页", skip_all, fields(visitor_id = tracing::field::Empty))]
pub async fn home(
    request: HttpRequest,
    session: TypedSession,
    forms: web::Data<ContactForms>,
    flash_messages: IncomingFlashMessages,
) -> Result<HttpResponse, actix_web::Error> {
    let theme = Theme::from_request(&request);

    // 首页不为新访客创建表单
    let form = match session.get_visitor_id().map_err(e500)? {
        Some(visitor_id) => {
            tracing::Span::current().record("visitor_id", tracing::field::display(&visitor_id));
            forms.get(visitor_id)
        }
        None => None,
    };
    let view = match form {
        Some(form) => FormView {
            state: form.state(),
            request: form.request(),
        },
        None => FormView::default(),
    };

    let refresh = refresh_after(view.state, forms.schedule());
    let notices = collect_flash_messages(&flash_messages);
    let body = HomeTemplate::new(theme, view, notices, refresh)
        .render()
        .map_err(e500)?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}
