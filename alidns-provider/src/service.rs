//! Record-management operations over the [`DnsApi`] capability set.
//!
//! This is the domain-facing layer: it takes validated input values, fills
//! in the defaults the caller left unspecified, builds the wire request and
//! delegates. Errors from the API pass through unchanged.

use crate::api::DnsApi;
use crate::error::Result;
use crate::types::{
    AddDomainRecordRequest, AddDomainRecordResponse, DeleteSubDomainRecordsRequest,
    DeleteSubDomainRecordsResponse, DescribeDomainRecordsRequest, DomainRecord,
    UpdateDomainRecordRequest, UpdateDomainRecordResponse,
};

const DEFAULT_TTL: i64 = 600;
const DEFAULT_PRIORITY: i64 = 1;
const DEFAULT_LINE: &str = "default";
const LANG: &str = "en";

const QUERY_PAGE_NUMBER: i64 = 1;
const QUERY_PAGE_SIZE: i64 = 500;
const QUERY_DIRECTION: &str = "ASC";
const QUERY_STATUS: &str = "Enable";
const QUERY_SEARCH_MODE: &str = "LIKE";

/// Input for [`RecordService::add`].
///
/// A zero `ttl` or `priority` and an empty `line` mean "not specified" and
/// take the defaults (600 / 1 / "default"). An explicit zero therefore
/// cannot be requested.
#[derive(Debug, Clone)]
pub struct AddInput {
    pub domain_name: String,
    pub name: String,
    pub record_type: String,
    pub value: String,
    pub ttl: i64,
    pub priority: i64,
    pub line: String,
}

/// Input for [`RecordService::del`].
#[derive(Debug, Clone)]
pub struct DelInput {
    pub domain_name: String,
    pub name: String,
    pub record_type: String,
}

/// Input for [`RecordService::query`].
#[derive(Debug, Clone)]
pub struct QueryInput {
    pub domain_name: String,
}

/// Input for [`RecordService::update`]. Same default rules as [`AddInput`].
#[derive(Debug, Clone)]
pub struct UpdateInput {
    pub record_id: String,
    pub name: String,
    pub record_type: String,
    pub value: String,
    pub ttl: i64,
    pub priority: i64,
    pub line: String,
}

/// One operation per DNS mutation/query kind.
pub struct RecordService {
    api: Box<dyn DnsApi>,
}

impl RecordService {
    pub fn new(api: Box<dyn DnsApi>) -> Self {
        Self { api }
    }

    pub async fn add(&self, input: AddInput) -> Result<AddDomainRecordResponse> {
        let req = AddDomainRecordRequest {
            lang: LANG.to_string(),
            domain_name: input.domain_name,
            rr: input.name,
            record_type: input.record_type,
            value: input.value,
            ttl: or_default(input.ttl, DEFAULT_TTL),
            priority: or_default(input.priority, DEFAULT_PRIORITY),
            line: or_default_str(input.line, DEFAULT_LINE),
        };
        self.api.add_domain_record(&req).await
    }

    pub async fn del(&self, input: DelInput) -> Result<DeleteSubDomainRecordsResponse> {
        let req = DeleteSubDomainRecordsRequest {
            lang: LANG.to_string(),
            domain_name: input.domain_name,
            rr: input.name,
            record_type: input.record_type,
        };
        self.api.delete_sub_domain_records(&req).await
    }

    /// Lists enabled records of a domain, single fixed page of 500,
    /// ascending. Always yields a `Vec`, empty when nothing matches.
    pub async fn query(&self, input: QueryInput) -> Result<Vec<DomainRecord>> {
        let req = DescribeDomainRecordsRequest {
            lang: LANG.to_string(),
            domain_name: input.domain_name,
            direction: QUERY_DIRECTION.to_string(),
            status: QUERY_STATUS.to_string(),
            page_number: QUERY_PAGE_NUMBER,
            page_size: QUERY_PAGE_SIZE,
            search_mode: QUERY_SEARCH_MODE.to_string(),
        };
        self.api.describe_domain_records(&req).await
    }

    pub async fn update(&self, input: UpdateInput) -> Result<UpdateDomainRecordResponse> {
        let req = UpdateDomainRecordRequest {
            lang: LANG.to_string(),
            record_id: input.record_id,
            rr: input.name,
            record_type: input.record_type,
            value: input.value,
            ttl: or_default(input.ttl, DEFAULT_TTL),
            priority: or_default(input.priority, DEFAULT_PRIORITY),
            line: or_default_str(input.line, DEFAULT_LINE),
        };
        self.api.update_domain_record(&req).await
    }
}

fn or_default(v: i64, fallback: i64) -> i64 {
    if v == 0 {
        fallback
    } else {
        v
    }
}

fn or_default_str(v: String, fallback: &str) -> String {
    if v.is_empty() {
        fallback.to_string()
    } else {
        v
    }
}
