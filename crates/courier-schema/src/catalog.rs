//! # Built-in Provider Catalog
//!
//! Schemas shipped with the engine. Adding a provider means adding its
//! definitions here under the conventional names; no mapping table is
//! involved.
//!
//! | Provider | Config schema | Request schema |
//! |----------|---------------|----------------|
//! | `mailgun` / `email` | `MailgunEmail` | `MailgunEmailRequest` |

use serde_json::json;

use crate::definition::{FieldDef, FieldType, SchemaDef};
use crate::registry::{RegistryError, RegistryKind, SchemaRegistry};

/// Default Mailgun API endpoint (US region).
pub const MAILGUN_US_BASE_URL: &str = "https://api.mailgun.net/";

const MAILGUN_EMAIL_DOC: &str = "
    # Mailgun email configuration

    ### Attributes:

        - api_key: str   - The API key of the sending account. Required to send emails.
        - base_url: str  - The API base URL. Accounts in the US use 'https://api.mailgun.net/',
        accounts in the EU use 'https://api.eu.mailgun.net/'.
        - username: str  - The account username. Usually 'api' or a chosen username.
    ";

const MAILGUN_EMAIL_REQUEST_DOC: &str = "
    # MailgunEmailRequest

    A subset of the attributes sent to Mailgun when submitting a message.

    See https://documentation.mailgun.com/docs/mailgun/api-reference/send/mailgun/messages

    ###  Attributes:

        - sender: str - The sender of the email
        - to: List[str] - The recipients of the email
        - subject: str - The subject of the email
        - text: Optional[str] - The plain-text body of the email
        - html: Optional[str] - The HTML body of the email
        - bcc: Optional[List[str]] - Blind carbon copy recipients
        - cc: Optional[List[str]] - Carbon copy recipients
    ";

/// `mailgun` + `email` stored configuration.
pub fn mailgun_email() -> SchemaDef {
    SchemaDef::new("MailgunEmail")
        .with_description(MAILGUN_EMAIL_DOC)
        .with_field(FieldDef::required("api_key", FieldType::String))
        .with_field(FieldDef::with_default(
            "base_url",
            FieldType::nullable(FieldType::String),
            json!(MAILGUN_US_BASE_URL),
        ))
        .with_field(FieldDef::with_default(
            "username",
            FieldType::nullable(FieldType::String),
            json!("api"),
        ))
}

/// `mailgun` + `email` outbound message payload.
pub fn mailgun_email_request() -> SchemaDef {
    let recipients = || FieldType::nullable(FieldType::list_of(FieldType::String));
    let body = || FieldType::nullable(FieldType::String);

    SchemaDef::new("MailgunEmailRequest")
        .with_description(MAILGUN_EMAIL_REQUEST_DOC)
        .with_field(FieldDef::required("sender", FieldType::String))
        .with_field(FieldDef::required("to", FieldType::list_of(FieldType::String)))
        .with_field(FieldDef::required("subject", FieldType::String))
        .with_field(FieldDef::required("cc", recipients()))
        .with_field(FieldDef::required("bcc", recipients()))
        .with_field(FieldDef::required("text", body()))
        .with_field(FieldDef::required("html", body()))
}

/// All built-in configuration schemas.
pub fn config_schemas() -> Result<SchemaRegistry, RegistryError> {
    SchemaRegistry::from_schemas(RegistryKind::Config, [mailgun_email()])
}

/// All built-in request schemas.
pub fn request_schemas() -> Result<SchemaRegistry, RegistryError> {
    SchemaRegistry::from_schemas(RegistryKind::Request, [mailgun_email_request()])
}
