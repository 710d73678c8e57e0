/// 用户填写的联系内容，序列化后即为`/api/contact`的请求体
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct SubmissionRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn as_str(&self) -> &str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

impl TryFrom<&str> for Field {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "message" => Ok(Field::Message),
            other => Err(format!("`{other}` is not a contact form field.")),
        }
    }
}

impl SubmissionRequest {
    /// 整体替换单个字段，不做任何校验
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn has_blank_field(&self) -> bool {
        Field::ALL.iter().any(|f| self.get(*f).trim().is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
