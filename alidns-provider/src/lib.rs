//! # alidns-provider
//!
//! Client library for the Alibaba Cloud DNS (Alidns) record-management API.
//!
//! The API is consumed through the four-operation [`DnsApi`] trait; the
//! [`AlidnsClient`] adapter implements it against the remote RPC endpoint
//! using ACS3-HMAC-SHA256 request signing. [`RecordService`] sits on top and
//! fills in the defaults a caller left unspecified before delegating.
//!
//! Everything is request-scoped: a client carries its credentials for one
//! invocation and holds no other state.

mod query;
mod sign;

pub mod api;
pub mod client;
pub mod error;
pub mod service;
pub mod types;

pub use api::DnsApi;
pub use client::AlidnsClient;
pub use error::{AlidnsError, Result};
pub use service::{AddInput, DelInput, QueryInput, RecordService, UpdateInput};
pub use types::{
    AddDomainRecordRequest, AddDomainRecordResponse, DeleteSubDomainRecordsRequest,
    DeleteSubDomainRecordsResponse, DescribeDomainRecordsRequest, DescribeDomainRecordsResponse,
    DomainRecord, UpdateDomainRecordRequest, UpdateDomainRecordResponse,
};

pub(crate) const ALIDNS_HOST: &str = "alidns.cn-hangzhou.aliyuncs.com";
pub(crate) const ALIDNS_VERSION: &str = "2015-01-09";
/// SHA256 of the empty body (fixed, every RPC request has an empty body).
pub(crate) const EMPTY_BODY_SHA256: &str =
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
