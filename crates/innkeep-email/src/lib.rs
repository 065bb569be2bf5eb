// SPDX-FileCopyrightText: 2026 Innkeep Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Outbound mail worker.
//!
//! [`Mailer::spawn`] starts a background task draining a bounded queue of
//! [`MailData`] messages. The [`MailerHandle`] end implements
//! [`NotificationSink`]: enqueueing never blocks and never fails the
//! caller; a full queue drops the message with a warning. With SMTP
//! disabled the worker logs each message instead of delivering it, which
//! is the default for development and tests.
//!
//! The worker stops once every handle is dropped and the queue drains.

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use innkeep_config::MailConfig;
use innkeep_core::{MailData, NotificationSink};

/// Sending end of the mail queue. Cheap to clone.
#[derive(Clone)]
pub struct MailerHandle {
    tx: mpsc::Sender<MailData>,
}

impl NotificationSink for MailerHandle {
    fn send(&self, message: MailData) {
        if let Err(e) = self.tx.try_send(message) {
            warn!(error = %e, "mail queue rejected message, dropping");
        }
    }
}

/// Background mail delivery worker.
pub struct Mailer;

impl Mailer {
    /// Start the worker and return the handle the engine sends through.
    ///
    /// The returned [`JoinHandle`] completes after the last
    /// [`MailerHandle`] clone is dropped and the queue has drained.
    pub fn spawn(config: MailConfig) -> (MailerHandle, JoinHandle<()>) {
        let (tx, rx) = mpsc::channel(config.queue_capacity.max(1));
        let worker = tokio::spawn(run_worker(config, rx));
        (MailerHandle { tx }, worker)
    }
}

async fn run_worker(config: MailConfig, mut rx: mpsc::Receiver<MailData>) {
    let transport = if config.smtp_enabled {
        Some(build_transport(&config))
    } else {
        None
    };

    while let Some(mail) = rx.recv().await {
        match &transport {
            Some(transport) => deliver(transport, &mail).await,
            None => info!(
                to = %mail.to,
                subject = %mail.subject,
                content = %mail.content,
                "smtp disabled, logging mail instead of sending"
            ),
        }
    }
    debug!("mail queue closed, worker stopping");
}

fn build_transport(config: &MailConfig) -> AsyncSmtpTransport<Tokio1Executor> {
    // Local relay on a plain socket; TLS relays carry credentials.
    let mut builder =
        AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
            .port(config.smtp_port);
    if let (Some(username), Some(password)) = (&config.smtp_username, &config.smtp_password) {
        builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
    }
    builder.build()
}

async fn deliver(transport: &AsyncSmtpTransport<Tokio1Executor>, mail: &MailData) {
    let message = match build_message(mail) {
        Ok(message) => message,
        Err(e) => {
            warn!(to = %mail.to, error = %e, "unbuildable mail message, dropping");
            return;
        }
    };
    match transport.send(message).await {
        Ok(_) => debug!(to = %mail.to, subject = %mail.subject, "mail delivered"),
        Err(e) => warn!(to = %mail.to, error = %e, "mail delivery failed, dropping"),
    }
}

fn build_message(mail: &MailData) -> Result<Message, Box<dyn std::error::Error + Send + Sync>> {
    let message = Message::builder()
        .from(mail.from.parse::<Mailbox>()?)
        .to(mail.to.parse::<Mailbox>()?)
        .subject(mail.subject.clone())
        .header(ContentType::TEXT_PLAIN)
        .body(mail.content.clone())?;
    Ok(message)
}
