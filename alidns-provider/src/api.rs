//! The record-management capability set.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{
    AddDomainRecordRequest, AddDomainRecordResponse, DeleteSubDomainRecordsRequest,
    DeleteSubDomainRecordsResponse, DescribeDomainRecordsRequest, DomainRecord,
    UpdateDomainRecordRequest, UpdateDomainRecordResponse,
};

/// The four Alidns record operations consumed by [`RecordService`].
///
/// [`AlidnsClient`] is the remote implementation; tests substitute doubles.
///
/// [`RecordService`]: crate::service::RecordService
/// [`AlidnsClient`]: crate::client::AlidnsClient
#[async_trait]
pub trait DnsApi: Send + Sync {
    /// Creates a DNS record.
    async fn add_domain_record(
        &self,
        req: &AddDomainRecordRequest,
    ) -> Result<AddDomainRecordResponse>;

    /// Deletes all records matching a host record name and type.
    async fn delete_sub_domain_records(
        &self,
        req: &DeleteSubDomainRecordsRequest,
    ) -> Result<DeleteSubDomainRecordsResponse>;

    /// Lists the records of a domain. An absent result set is an empty
    /// `Vec`, never an error.
    async fn describe_domain_records(
        &self,
        req: &DescribeDomainRecordsRequest,
    ) -> Result<Vec<DomainRecord>>;

    /// Rewrites an existing record addressed by its record id.
    async fn update_domain_record(
        &self,
        req: &UpdateDomainRecordRequest,
    ) -> Result<UpdateDomainRecordResponse>;
}
