use crate::types::{LeadForm, LeadOutcome, LeadPayload, LeadSource};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info, warn};

/// Phone numbers and emails never go to the logs as-is.
pub fn phone_label(phone: &str) -> String {
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    format!("digits={digits}")
}

pub fn email_label(email: &str) -> String {
    if email.trim().is_empty() {
        return "<none>".to_string();
    }
    let domain = email.split('@').nth(1).unwrap_or("invalid");
    format!("{} (len={})", domain, email.len())
}

/// Something that forwards a lead to the company mailbox.
#[async_trait]
pub trait LeadRelay: Send + Sync {
    async fn relay(&self, source: LeadSource, form: LeadForm) -> LeadOutcome;
}

#[derive(Debug, Deserialize)]
struct RelayResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

/// Web3Forms relay (production)
pub struct Web3FormsRelay {
    client: reqwest::Client,
    endpoint: String,
    access_key: Option<String>,
}

impl Web3FormsRelay {
    pub fn new(client: reqwest::Client, endpoint: String, access_key: Option<String>) -> Self {
        Self {
            client,
            endpoint,
            access_key,
        }
    }
}

#[async_trait]
impl LeadRelay for Web3FormsRelay {
    async fn relay(&self, source: LeadSource, form: LeadForm) -> LeadOutcome {
        let Some(access_key) = self.access_key.as_deref() else {
            warn!("leads.web3forms.relay: WEB3FORMS_KEY is not set");
            return LeadOutcome::NotConfigured;
        };

        let payload = LeadPayload::new(access_key, source, form);
        debug!(
            "leads.web3forms.relay: source={} name_len={} phone={} email={} message_len={}",
            source.as_str(),
            payload.name.chars().count(),
            phone_label(&payload.phone),
            email_label(&payload.email),
            payload.message.chars().count()
        );

        let response = match self.client.post(&self.endpoint).json(&payload).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("leads.web3forms.relay: request failed: {e}");
                return LeadOutcome::Unreachable;
            }
        };

        let status = response.status();
        match response.json::<RelayResponse>().await {
            Ok(body) if body.success => {
                info!("leads.web3forms.relay: accepted source={}", source.as_str());
                LeadOutcome::Sent
            }
            Ok(body) => {
                warn!(
                    "leads.web3forms.relay: rejected status={} message={}",
                    status,
                    body.message.unwrap_or_default()
                );
                LeadOutcome::Rejected
            }
            Err(e) => {
                warn!("leads.web3forms.relay: unreadable response status={status}: {e}");
                LeadOutcome::Rejected
            }
        }
    }
}

/// Console relay (local development)
pub struct ConsoleLeadRelay;

#[async_trait]
impl LeadRelay for ConsoleLeadRelay {
    async fn relay(&self, source: LeadSource, form: LeadForm) -> LeadOutcome {
        println!("\n📨 LEAD (Local Mode - Not Sent)");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("Subject: {}", source.subject());
        println!("Name:    {}", form.name);
        println!("Phone:   {}", form.phone);
        println!("Email:   {}", form.email);
        println!("────────────────────────────────");
        println!("{}", form.message);
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
        LeadOutcome::Sent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    fn client() -> reqwest::Client {
        reqwest::Client::builder().no_proxy().build().unwrap()
    }

    fn form() -> LeadForm {
        LeadForm {
            name: "Ерлан".to_string(),
            phone: "+7 (701) 122-24-77".to_string(),
            email: "erlan@mail.kz".to_string(),
            message: "Нужен монтаж ВОЛС".to_string(),
        }
    }

    /// One-shot HTTP server: answers a single request with `body` and hands
    /// back the request body it received.
    async fn fake_relay(body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/submit", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 4096];
            let (header_end, content_length) = loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break (buf.len(), 0);
                }
                buf.extend_from_slice(&chunk[..n]);
                if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                    let headers = String::from_utf8_lossy(&buf[..pos]).to_lowercase();
                    let len = headers
                        .lines()
                        .find_map(|l| l.strip_prefix("content-length:"))
                        .and_then(|v| v.trim().parse::<usize>().ok())
                        .unwrap_or(0);
                    break (pos + 4, len);
                }
            };
            while buf.len() < header_end + content_length {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }

            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();

            String::from_utf8_lossy(&buf[header_end..]).to_string()
        });

        (url, handle)
    }

    #[test]
    fn test_phone_label_counts_digits_only() {
        assert_eq!(phone_label("+7 (701) 122-24-77"), "digits=11");
    }

    #[test]
    fn test_email_label_keeps_domain() {
        assert_eq!(email_label("a@mail.ru"), "mail.ru (len=9)");
        assert_eq!(email_label(""), "<none>");
        assert_eq!(email_label("nope"), "invalid (len=4)");
    }

    #[tokio::test]
    async fn missing_key_is_not_configured() {
        let relay = Web3FormsRelay::new(
            client(),
            "http://127.0.0.1:9/submit".to_string(),
            None,
        );
        assert_eq!(relay.relay(LeadSource::Contact, form()).await, LeadOutcome::NotConfigured);
    }

    #[tokio::test]
    async fn accepted_lead_is_sent_with_full_payload() {
        let (url, server) = fake_relay(r#"{"success":true,"message":"Email sent successfully!"}"#).await;
        let relay = Web3FormsRelay::new(client(), url, Some("key-1".to_string()));

        let outcome = relay.relay(LeadSource::Landing, form()).await;
        assert_eq!(outcome, LeadOutcome::Sent);

        let sent: serde_json::Value = serde_json::from_str(&server.await.unwrap()).unwrap();
        assert_eq!(sent["access_key"], "key-1");
        assert_eq!(sent["subject"], "Новая заявка: Главная страница");
        assert_eq!(sent["name"], "Ерлан");
        assert_eq!(sent["message"], "Нужен монтаж ВОЛС");
    }

    #[tokio::test]
    async fn unsuccessful_answer_is_rejected() {
        let (url, server) = fake_relay(r#"{"success":false,"message":"Invalid access key"}"#).await;
        let relay = Web3FormsRelay::new(client(), url, Some("bad".to_string()));
        assert_eq!(relay.relay(LeadSource::Contact, form()).await, LeadOutcome::Rejected);
        server.await.unwrap();
    }

    #[tokio::test]
    async fn unreadable_answer_is_rejected() {
        let (url, server) = fake_relay("<html>maintenance</html>").await;
        let relay = Web3FormsRelay::new(client(), url, Some("key".to_string()));
        assert_eq!(relay.relay(LeadSource::Contact, form()).await, LeadOutcome::Rejected);
        server.await.unwrap();
    }

    #[tokio::test]
    async fn closed_port_is_unreachable() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/submit", listener.local_addr().unwrap());
        drop(listener);

        let relay = Web3FormsRelay::new(client(), url, Some("key".to_string()));
        assert_eq!(relay.relay(LeadSource::Contact, form()).await, LeadOutcome::Unreachable);
    }

    #[tokio::test]
    async fn console_relay_always_sends() {
        assert_eq!(
            ConsoleLeadRelay.relay(LeadSource::Landing, form()).await,
            LeadOutcome::Sent
        );
    }
}
