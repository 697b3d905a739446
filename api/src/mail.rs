//! Outgoing mail over SMTP.
//!
//! Uses the `lettre` async transport. Host, port, credentials and sender name come from
//! [`AppConfig`]; when no credentials are configured nothing is sent.

use lettre::{
    Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    address::AddressError,
    message::{Mailbox, MultiPart, SinglePart, header},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
};
use thiserror::Error;
use util::config::AppConfig;

#[derive(Debug, Error)]
pub enum EmailError {
    #[error("invalid email address: {0}")]
    Address(#[from] AddressError),

    #[error("failed to build email: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("smtp error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

pub struct EmailService;

impl EmailService {
    /// Mails the reset link for `reset_token` to `to_email`.
    pub async fn send_password_reset_email(
        config: &AppConfig,
        to_email: &str,
        reset_token: &str,
    ) -> Result<(), EmailError> {
        let email = password_reset_message(config, to_email, reset_token)?;
        transport(config)?.send(email).await?;
        Ok(())
    }
}

pub fn reset_link(config: &AppConfig, reset_token: &str) -> String {
    format!(
        "{}/reset-password?token={}",
        config.frontend_url.trim_end_matches('/'),
        reset_token
    )
}

fn password_reset_message(
    config: &AppConfig,
    to_email: &str,
    reset_token: &str,
) -> Result<Message, EmailError> {
    let from = Mailbox::new(
        Some(config.email_from_name.clone()),
        config.gmail_username.parse::<Address>()?,
    );
    let link = reset_link(config, reset_token);
    let minutes = config.reset_token_expiry_minutes;
    let sender = &config.email_from_name;

    let text = format!(
        "Hello,\n\n\
         You have requested to reset your password. Open the link below to proceed:\n\n\
         {link}\n\n\
         This link will expire in {minutes} minutes.\n\n\
         If you did not request this password reset, please ignore this email.\n\n\
         {sender}"
    );
    let html = format!(
        "<html><body>\
         <p>Hello,</p>\
         <p>You have requested to reset your password.</p>\
         <p><a href=\"{link}\">Reset Password</a></p>\
         <p>This link will expire in {minutes} minutes.</p>\
         <p>If you did not request this password reset, please ignore this email.</p>\
         <p>{sender}</p>\
         </body></html>"
    );

    let message = Message::builder()
        .from(from)
        .to(to_email.parse::<Mailbox>()?)
        .subject("Reset Your Password")
        .multipart(
            MultiPart::alternative()
                .singlepart(
                    SinglePart::builder()
                        .header(header::ContentType::TEXT_PLAIN)
                        .body(text),
                )
                .singlepart(
                    SinglePart::builder()
                        .header(header::ContentType::TEXT_HTML)
                        .body(html),
                ),
        )?;
    Ok(message)
}

fn transport(config: &AppConfig) -> Result<AsyncSmtpTransport<Tokio1Executor>, EmailError> {
    let tls = TlsParameters::new(config.smtp_host.clone())?;

    Ok(AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)?
        .port(config.smtp_port)
        .tls(Tls::Required(tls))
        .credentials(Credentials::new(
            config.gmail_username.clone(),
            config.gmail_app_password.clone(),
        ))
        .build())
}
