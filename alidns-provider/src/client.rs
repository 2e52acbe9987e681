//! Signed HTTP transport for the Alidns RPC endpoint.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::DnsApi;
use crate::error::{AlidnsError, Result};
use crate::query::to_query_string;
use crate::sign;
use crate::types::{
    AddDomainRecordRequest, AddDomainRecordResponse, DeleteSubDomainRecordsRequest,
    DeleteSubDomainRecordsResponse, DescribeDomainRecordsRequest, DescribeDomainRecordsResponse,
    DomainRecord, UpdateDomainRecordRequest, UpdateDomainRecordResponse,
};
use crate::{ALIDNS_HOST, ALIDNS_VERSION, EMPTY_BODY_SHA256};

/// Remote [`DnsApi`] implementation.
///
/// Holds the credentials and one reqwest client for a single invocation.
/// No retries: a remote failure is final.
pub struct AlidnsClient {
    http: Client,
    access_key_id: String,
    access_key_secret: String,
}

impl AlidnsClient {
    /// Creates a client. Fails when either access key field is empty.
    pub fn new(
        access_key_id: impl Into<String>,
        access_key_secret: impl Into<String>,
    ) -> Result<Self> {
        let access_key_id = access_key_id.into();
        let access_key_secret = access_key_secret.into();

        if access_key_id.trim().is_empty() {
            return Err(AlidnsError::MissingCredential {
                field: "AccessKeyId",
            });
        }
        if access_key_secret.trim().is_empty() {
            return Err(AlidnsError::MissingCredential {
                field: "AccessKeySecret",
            });
        }

        Ok(Self {
            http: Client::new(),
            access_key_id,
            access_key_secret,
        })
    }

    /// Executes one RPC action. Parameters travel in the query string with
    /// an empty body, per the ACS3 RPC signing scheme.
    async fn request<T, B>(&self, action: &str, params: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let query_string = to_query_string(params)?;
        let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
        let nonce = uuid::Uuid::new_v4().to_string();

        let authorization = sign::authorization(
            &self.access_key_id,
            &self.access_key_secret,
            action,
            &query_string,
            &timestamp,
            &nonce,
        );

        let url = if query_string.is_empty() {
            format!("https://{ALIDNS_HOST}/")
        } else {
            format!("https://{ALIDNS_HOST}/?{query_string}")
        };

        log::debug!("POST {ALIDNS_HOST} (Action: {action})");

        let response = self
            .http
            .post(&url)
            .header("Host", ALIDNS_HOST)
            .header("x-acs-action", action)
            .header("x-acs-version", ALIDNS_VERSION)
            .header("x-acs-date", &timestamp)
            .header("x-acs-signature-nonce", &nonce)
            .header("x-acs-content-sha256", EMPTY_BODY_SHA256)
            .header("Authorization", authorization)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AlidnsError::Timeout {
                        detail: e.to_string(),
                    }
                } else {
                    AlidnsError::Network {
                        detail: e.to_string(),
                    }
                }
            })?;

        let status = response.status().as_u16();
        log::debug!("response status: {status}");

        let text = response
            .text()
            .await
            .map_err(|e| AlidnsError::Network {
                detail: format!("failed to read response body: {e}"),
            })?;

        let value: serde_json::Value = match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(_) if status >= 400 => {
                return Err(AlidnsError::Network {
                    detail: format!("HTTP {status}: {text}"),
                });
            }
            Err(e) => {
                return Err(AlidnsError::Parse {
                    detail: e.to_string(),
                });
            }
        };

        // Error bodies carry Code + Message regardless of HTTP status.
        if let (Some(code), Some(message)) = (
            value.get("Code").and_then(|v| v.as_str()),
            value.get("Message").and_then(|v| v.as_str()),
        ) {
            log::warn!("API error: {code} - {message}");
            let request_id = value
                .get("RequestId")
                .and_then(|v| v.as_str())
                .map(str::to_string);
            return Err(AlidnsError::Api {
                code: code.to_string(),
                message: message.to_string(),
                request_id,
            });
        }

        if status >= 400 {
            return Err(AlidnsError::Network {
                detail: format!("HTTP {status}: {text}"),
            });
        }

        serde_json::from_value(value).map_err(|e| AlidnsError::Parse {
            detail: e.to_string(),
        })
    }
}

#[async_trait]
impl DnsApi for AlidnsClient {
    async fn add_domain_record(
        &self,
        req: &AddDomainRecordRequest,
    ) -> Result<AddDomainRecordResponse> {
        self.request("AddDomainRecord", req).await
    }

    async fn delete_sub_domain_records(
        &self,
        req: &DeleteSubDomainRecordsRequest,
    ) -> Result<DeleteSubDomainRecordsResponse> {
        self.request("DeleteSubDomainRecords", req).await
    }

    async fn describe_domain_records(
        &self,
        req: &DescribeDomainRecordsRequest,
    ) -> Result<Vec<DomainRecord>> {
        let response: DescribeDomainRecordsResponse =
            self.request("DescribeDomainRecords", req).await?;
        Ok(response
            .domain_records
            .and_then(|list| list.record)
            .unwrap_or_default())
    }

    async fn update_domain_record(
        &self,
        req: &UpdateDomainRecordRequest,
    ) -> Result<UpdateDomainRecordResponse> {
        self.request("UpdateDomainRecord", req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_access_key_id_is_rejected() {
        let result = AlidnsClient::new("", "secret");
        assert!(matches!(
            result,
            Err(AlidnsError::MissingCredential {
                field: "AccessKeyId"
            })
        ));
    }

    #[test]
    fn empty_access_key_secret_is_rejected() {
        let result = AlidnsClient::new("key-id", "");
        assert!(matches!(
            result,
            Err(AlidnsError::MissingCredential {
                field: "AccessKeySecret"
            })
        ));
    }

    #[test]
    fn whitespace_credentials_are_rejected() {
        assert!(AlidnsClient::new("  ", "secret").is_err());
        assert!(AlidnsClient::new("key-id", "\t").is_err());
    }

    #[test]
    fn valid_credentials_are_accepted() {
        assert!(AlidnsClient::new("key-id", "secret").is_ok());
    }
}
