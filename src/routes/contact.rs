use std::fmt::Debug;

use actix_web::{body::BoxBody, web, HttpResponse, ResponseError};
use actix_web_flash_messages::FlashMessage;

use crate::{
    contact_form::{ContactForms, SubmissionError, SubmitOutcome},
    domain::Field,
    session_state::TypedSession,
    util::{e400, e500, error_chain_fmt, see_other},
};

const CONTACT_SECTION: &str = "/#contact";

#[derive(serde::Deserialize)]
pub struct FormData {
    name: String,
    email: String,
    message: String,
}

#[tracing::instrument(
    name = "提交联系表单",
    skip_all,
    fields(visitor_id = tracing::field::Empty, outcome = tracing::field::Empty)
)]
pub async fn submit_contact(
    form: web::Form<FormData>,
    session: TypedSession,
    forms: web::Data<ContactForms>,
) -> Result<HttpResponse, ContactError> {
    let visitor_id = session.ensure_visitor_id()?;
    tracing::Span::current().record("visitor_id", tracing::field::display(&visitor_id));

    let contact_form = forms.get_or_create(visitor_id);
    let FormData {
        name,
        email,
        message,
    } = form.0;
    contact_form.update_field(Field::Name, name);
    contact_form.update_field(Field::Email, email);
    contact_form.update_field(Field::Message, message);

    // 对应页面上的required属性，流程本身不再校验
    if contact_form.request().has_blank_field() {
        return Err(ContactError::MissingFields);
    }

    let outcome = contact_form.submit().await?;
    let outcome = match outcome {
        SubmitOutcome::Accepted => "accepted",
        SubmitOutcome::Ignored => "ignored",
    };
    tracing::Span::current().record("outcome", outcome);

    Ok(see_other(CONTACT_SECTION))
}

#[derive(serde::Deserialize)]
pub struct FieldData {
    field: String,
    value: String,
}

/// 保存草稿：只替换单个字段，不提交
pub async fn update_contact_field(
    form: web::Form<FieldData>,
    session: TypedSession,
    forms: web::Data<ContactForms>,
) -> Result<HttpResponse, actix_web::Error> {
    let FieldData { field, value } = form.0;
    let field = Field::try_from(field.as_str()).map_err(e400)?;
    let visitor_id = session.ensure_visitor_id().map_err(e500)?;

    forms.get_or_create(visitor_id).update_field(field, value);

    Ok(see_other(CONTACT_SECTION))
}

/// 丢弃访客的表单并结束session，未完成的定时转换随之取消
pub async fn discard_contact(
    session: TypedSession,
    forms: web::Data<ContactForms>,
) -> Result<HttpResponse, actix_web::Error> {
    if let Some(visitor_id) = session.get_visitor_id().map_err(e500)? {
        forms.forget(visitor_id);
    }
    session.purge();

    Ok(see_other(CONTACT_SECTION))
}

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error("Please fill in all fields.")]
    MissingFields,
    #[error("{0}")]
    SubmissionFailed(#[from] SubmissionError),
    #[error("Something went wrong.")]
    UnexpectedError(#[from] anyhow::Error),
}

impl Debug for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ContactError {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            ContactError::UnexpectedError(_) => HttpResponse::InternalServerError().finish(),
            ContactError::MissingFields | ContactError::SubmissionFailed(_) => {
                FlashMessage::error(self.to_string()).send();
                see_other(CONTACT_SECTION)
            }
        }
    }
}
