//! Alidns wire structures (API version 2015-01-09).
//!
//! Field names mirror the provider's PascalCase protocol keys. Response
//! structures are pass-through values: every field is optional, unknown
//! fields are ignored, and serialization skips what the provider omitted so
//! printed output mirrors the response body.

use serde::{Deserialize, Serialize};

// ============ Requests ============

#[derive(Debug, Clone, Serialize)]
pub struct AddDomainRecordRequest {
    #[serde(rename = "Lang")]
    pub lang: String,
    #[serde(rename = "DomainName")]
    pub domain_name: String,
    #[serde(rename = "RR")]
    pub rr: String,
    #[serde(rename = "Type")]
    pub record_type: String,
    #[serde(rename = "Value")]
    pub value: String,
    #[serde(rename = "TTL")]
    pub ttl: i64,
    #[serde(rename = "Priority")]
    pub priority: i64,
    #[serde(rename = "Line")]
    pub line: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteSubDomainRecordsRequest {
    #[serde(rename = "Lang")]
    pub lang: String,
    #[serde(rename = "DomainName")]
    pub domain_name: String,
    #[serde(rename = "RR")]
    pub rr: String,
    #[serde(rename = "Type")]
    pub record_type: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DescribeDomainRecordsRequest {
    #[serde(rename = "Lang")]
    pub lang: String,
    #[serde(rename = "DomainName")]
    pub domain_name: String,
    #[serde(rename = "Direction")]
    pub direction: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "PageNumber")]
    pub page_number: i64,
    #[serde(rename = "PageSize")]
    pub page_size: i64,
    #[serde(rename = "SearchMode")]
    pub search_mode: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateDomainRecordRequest {
    #[serde(rename = "Lang")]
    pub lang: String,
    #[serde(rename = "RecordId")]
    pub record_id: String,
    #[serde(rename = "RR")]
    pub rr: String,
    #[serde(rename = "Type")]
    pub record_type: String,
    #[serde(rename = "Value")]
    pub value: String,
    #[serde(rename = "TTL")]
    pub ttl: i64,
    #[serde(rename = "Priority")]
    pub priority: i64,
    #[serde(rename = "Line")]
    pub line: String,
}

// ============ Responses ============

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddDomainRecordResponse {
    #[serde(rename = "RequestId", skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(rename = "RecordId", skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteSubDomainRecordsResponse {
    #[serde(rename = "RequestId", skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(rename = "RR", skip_serializing_if = "Option::is_none")]
    pub rr: Option<String>,
    /// The provider reports this count as a string.
    #[serde(rename = "TotalCount", skip_serializing_if = "Option::is_none")]
    pub total_count: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDomainRecordResponse {
    #[serde(rename = "RequestId", skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(rename = "RecordId", skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DescribeDomainRecordsResponse {
    #[serde(rename = "RequestId", skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(rename = "TotalCount", skip_serializing_if = "Option::is_none")]
    pub total_count: Option<i64>,
    #[serde(rename = "PageNumber", skip_serializing_if = "Option::is_none")]
    pub page_number: Option<i64>,
    #[serde(rename = "PageSize", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
    #[serde(rename = "DomainRecords", skip_serializing_if = "Option::is_none")]
    pub domain_records: Option<DomainRecordList>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DomainRecordList {
    #[serde(rename = "Record", skip_serializing_if = "Option::is_none")]
    pub record: Option<Vec<DomainRecord>>,
}

/// One DNS record as the provider reports it. Owned by the provider,
/// read-only here, displayed as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DomainRecord {
    #[serde(rename = "RecordId", skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
    #[serde(rename = "DomainName", skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    #[serde(rename = "RR", skip_serializing_if = "Option::is_none")]
    pub rr: Option<String>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,
    #[serde(rename = "Value", skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(rename = "TTL", skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i64>,
    #[serde(rename = "Priority", skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(rename = "Line", skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "Locked", skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    #[serde(rename = "Weight", skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
    #[serde(rename = "Remark", skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    #[serde(rename = "CreateTimestamp", skip_serializing_if = "Option::is_none")]
    pub create_timestamp: Option<i64>,
    #[serde(rename = "UpdateTimestamp", skip_serializing_if = "Option::is_none")]
    pub update_timestamp: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_describe_response() {
        let json = r#"{
            "RequestId": "536E9CAD-0000-0000-0000-C1D1D1D1D1D1",
            "TotalCount": 2,
            "PageNumber": 1,
            "PageSize": 500,
            "DomainRecords": {
                "Record": [
                    {
                        "RecordId": "9999985",
                        "RR": "www",
                        "Type": "A",
                        "Value": "1.2.3.4",
                        "TTL": 600,
                        "Line": "default",
                        "Status": "ENABLE",
                        "Locked": false
                    },
                    {
                        "RecordId": "9999986",
                        "RR": "@",
                        "Type": "TXT",
                        "Value": "hello",
                        "TTL": 300,
                        "Line": "default"
                    }
                ]
            }
        }"#;

        let response: DescribeDomainRecordsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.total_count, Some(2));

        let records = response.domain_records.unwrap().record.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].rr.as_deref(), Some("www"));
        assert_eq!(records[0].ttl, Some(600));
        assert_eq!(records[1].record_type.as_deref(), Some("TXT"));
        assert_eq!(records[1].priority, None);
    }

    #[test]
    fn deserialize_describe_response_without_records() {
        let json = r#"{"RequestId": "X", "TotalCount": 0, "DomainRecords": {}}"#;
        let response: DescribeDomainRecordsResponse = serde_json::from_str(json).unwrap();
        assert!(response.domain_records.unwrap().record.is_none());
    }

    #[test]
    fn serialize_record_skips_absent_fields() {
        let record = DomainRecord {
            record_id: Some("42".to_string()),
            rr: Some("www".to_string()),
            record_type: Some("A".to_string()),
            value: Some("1.2.3.4".to_string()),
            ttl: Some(600),
            ..DomainRecord::default()
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""RecordId":"42""#));
        assert!(!json.contains("Priority"));
        assert!(!json.contains("Remark"));
    }

    #[test]
    fn deserialize_ignores_unknown_fields() {
        let json = r#"{"RecordId": "1", "RR": "www", "SomeNewField": {"x": 1}}"#;
        let record: DomainRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.record_id.as_deref(), Some("1"));
    }

    #[test]
    fn delete_response_total_count_is_string() {
        let json = r#"{"RequestId": "X", "RR": "www", "TotalCount": "2"}"#;
        let response: DeleteSubDomainRecordsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.total_count.as_deref(), Some("2"));
    }
}
