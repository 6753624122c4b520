//! The rooms fixture table and the request that creates it

use crate::config::Cli;
use aws_config::retry::RetryConfig;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::config::{Credentials, Region};
use aws_sdk_dynamodb::error::{BuildError, SdkError};
use aws_sdk_dynamodb::operation::create_table::CreateTableError;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, KeySchemaElement, KeyType, ProvisionedThroughput, ScalarAttributeType,
    SseSpecification,
};
use aws_sdk_dynamodb::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, instrument, warn};

pub const HASH_KEY: &str = "id";
pub const READ_CAPACITY_UNITS: i64 = 5;
pub const WRITE_CAPACITY_UNITS: i64 = 5;

const CREDENTIALS_PROVIDER: &str = "create-local-table";

pub type Result<T> = std::result::Result<T, ProvisionError>;

#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("Invalid create-table request: {0}")]
    InvalidRequest(#[from] BuildError),

    #[error("Error creating table '{table}'")]
    CreateTable {
        table: String,
        #[source]
        source: SdkError<CreateTableError>,
    },
}

/// Shape of the fixture table. Only the name varies between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TableDescriptor {
    pub table_name: String,
    pub hash_key: String,
    /// DynamoDB scalar type of the hash key; always numeric.
    pub hash_key_type: String,
    pub read_capacity_units: i64,
    pub write_capacity_units: i64,
    pub sse_enabled: bool,
}

impl TableDescriptor {
    pub fn rooms(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            hash_key: HASH_KEY.to_string(),
            hash_key_type: ScalarAttributeType::N.as_str().to_string(),
            read_capacity_units: READ_CAPACITY_UNITS,
            write_capacity_units: WRITE_CAPACITY_UNITS,
            sse_enabled: true,
        }
    }

    pub fn attribute_definition(&self) -> Result<AttributeDefinition> {
        Ok(AttributeDefinition::builder()
            .attribute_name(&self.hash_key)
            .attribute_type(ScalarAttributeType::from(self.hash_key_type.as_str()))
            .build()?)
    }

    pub fn key_schema(&self) -> Result<KeySchemaElement> {
        Ok(KeySchemaElement::builder()
            .attribute_name(&self.hash_key)
            .key_type(KeyType::Hash)
            .build()?)
    }

    pub fn provisioned_throughput(&self) -> Result<ProvisionedThroughput> {
        Ok(ProvisionedThroughput::builder()
            .read_capacity_units(self.read_capacity_units)
            .write_capacity_units(self.write_capacity_units)
            .build()?)
    }

    pub fn sse_specification(&self) -> SseSpecification {
        SseSpecification::builder().enabled(self.sse_enabled).build()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created { status: Option<String> },
    AlreadyExists,
}

/// DynamoDB client for the configured endpoint with static credentials.
///
/// SDK retries are disabled; a failed request fails the run.
pub async fn connect(cli: &Cli) -> Client {
    let credentials = Credentials::new(
        &cli.access_key_id,
        &cli.secret_access_key,
        None,
        None,
        CREDENTIALS_PROVIDER,
    );

    let config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(cli.region.clone()))
        .endpoint_url(&cli.endpoint)
        .credentials_provider(credentials)
        .retry_config(RetryConfig::disabled())
        .load()
        .await;

    Client::new(&config)
}

#[instrument(skip(client, descriptor), fields(table = %descriptor.table_name))]
pub async fn create_table(
    client: &Client,
    descriptor: &TableDescriptor,
    if_not_exists: bool,
) -> Result<Outcome> {
    let response = client
        .create_table()
        .table_name(&descriptor.table_name)
        .attribute_definitions(descriptor.attribute_definition()?)
        .key_schema(descriptor.key_schema()?)
        .provisioned_throughput(descriptor.provisioned_throughput()?)
        .sse_specification(descriptor.sse_specification())
        .send()
        .await;

    match response {
        Ok(output) => {
            let status = output
                .table_description()
                .and_then(|description| description.table_status())
                .map(|status| status.as_str().to_string());
            info!(status = ?status, "Create-table request accepted");
            Ok(Outcome::Created { status })
        }
        Err(err) if if_not_exists && is_table_in_use(&err) => {
            warn!("Table already exists, leaving it in place");
            Ok(Outcome::AlreadyExists)
        }
        Err(source) => Err(ProvisionError::CreateTable {
            table: descriptor.table_name.clone(),
            source,
        }),
    }
}

/// Connect with `cli` settings and create the rooms table.
pub async fn provision(cli: &Cli) -> Result<Outcome> {
    let descriptor = TableDescriptor::rooms(&cli.table_name);
    let client = connect(cli).await;
    create_table(&client, &descriptor, cli.if_not_exists).await
}

fn is_table_in_use(err: &SdkError<CreateTableError>) -> bool {
    err.as_service_error()
        .is_some_and(CreateTableError::is_resource_in_use_exception)
}
