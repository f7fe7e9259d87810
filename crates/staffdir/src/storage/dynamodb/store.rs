//! DynamoDB record store implementation.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use staffdir_core::storage::{IndexQuery, Item, ReadConsistency, RecordStore, Result, TableSchema};

use super::conversions::{attributes_to_item, item_to_attributes};
use super::error::{map_get_item_error, map_put_item_error, map_query_error};
use super::keys;

/// DynamoDB-based record store.
///
/// Holds a shared SDK client; timeouts and retries come from the client
/// configuration.
#[derive(Debug, Clone)]
pub struct DynamoDbStore {
    client: Client,
}

impl DynamoDbStore {
    /// Creates a store over an existing DynamoDB client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Creates a store using the AWS SDK default credential chain.
    ///
    /// `endpoint_url` points the client at a local DynamoDB when set.
    pub async fn connect(endpoint_url: Option<&str>, region: &str) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(region.to_string()));

        if let Some(endpoint) = endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        Self::new(Client::new(&sdk_config))
    }
}

#[async_trait]
impl RecordStore for DynamoDbStore {
    async fn get_item(&self, table: &TableSchema, key: &str) -> Result<Option<Item>> {
        let result = self
            .client
            .get_item()
            .table_name(&table.name)
            .set_key(Some(keys::primary_key(table, key)))
            .send()
            .await
            .map_err(|e| map_get_item_error(e, &table.name))?;

        result.item.map(attributes_to_item).transpose()
    }

    async fn put_item(&self, table: &TableSchema, item: Item) -> Result<()> {
        tracing::debug!(table = %table.name, key = ?table.key_of(&item), "PutItem");

        self.client
            .put_item()
            .table_name(&table.name)
            .set_item(Some(item_to_attributes(item)))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, &table.name))?;

        Ok(())
    }

    async fn query_index(&self, query: &IndexQuery) -> Result<Vec<Item>> {
        // DynamoDB rejects a zero limit.
        if query.limit == 0 {
            return Ok(Vec::new());
        }

        let exclusive_start_key = query
            .exclusive_start
            .as_deref()
            .map(|cursor| keys::exclusive_start_key(query, cursor))
            .transpose()?;

        let result = self
            .client
            .query()
            .table_name(&query.table.name)
            .index_name(query.index.name)
            .key_condition_expression("#pk = :pk")
            .expression_attribute_names("#pk", query.index.partition_key)
            .expression_attribute_values(":pk", AttributeValue::S(query.partition_value.clone()))
            .set_exclusive_start_key(exclusive_start_key)
            .limit(i32::try_from(query.limit).unwrap_or(i32::MAX))
            .scan_index_forward(query.direction.is_forward())
            .consistent_read(query.consistency == ReadConsistency::Strong)
            .send()
            .await
            .map_err(|e| map_query_error(e, &query.table.name))?;

        let items = result.items.unwrap_or_default();
        tracing::debug!(
            table = %query.table.name,
            index = query.index.name,
            returned = items.len(),
            "Query"
        );

        items.into_iter().map(attributes_to_item).collect()
    }
}
