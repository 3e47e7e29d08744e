use super::{generated, QueryConnection};
use crate::endpoints::{self, QueryResult};
use tonic::transport::{Channel, Endpoint};

#[derive(Clone, Debug)]
/// Client for the `cosmwasm.wasm.v1.Query` service of a node.
/// Cloning is very cheap and reuses the underlying connection, so clones are
/// the intended way of sharing the client between tasks.
pub struct GrpcQueryClient {
    client: generated::query_client::QueryClient<Channel>,
}

impl GrpcQueryClient {
    /// Connect to the node. The request timeout, if any, is taken from the
    /// endpoint.
    pub async fn new<E: Into<Endpoint>>(endpoint: E) -> Result<Self, tonic::transport::Error> {
        let channel = endpoint.into().connect().await?;
        Ok(Self::from_channel(channel))
    }

    /// A client that connects on first use.
    pub fn connect_lazy(endpoint: Endpoint) -> Self { Self::from_channel(endpoint.connect_lazy()) }

    pub fn from_channel(channel: Channel) -> Self {
        Self {
            client: generated::query_client::QueryClient::new(channel),
        }
    }

    /// Run a smart query and return the raw JSON bytes of the result.
    pub async fn smart_contract_state(
        &mut self,
        address: &str,
        query_data: &[u8],
    ) -> endpoints::QueryResult<Vec<u8>> {
        let request = generated::QuerySmartContractStateRequest {
            address:    address.to_owned(),
            query_data: query_data.to_vec(),
        };
        let response = self.client.smart_contract_state(request).await?;
        Ok(response.into_inner().data)
    }
}

impl QueryConnection for GrpcQueryClient {
    async fn query_contract_smart(&self, address: &str, query_data: &[u8]) -> QueryResult<Vec<u8>> {
        self.clone()
            .smart_contract_state(address, query_data)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn unreachable_node_is_an_rpc_error() {
        let endpoint = Endpoint::from_static("http://127.0.0.1:1").timeout(Duration::from_secs(2));
        let client = GrpcQueryClient::connect_lazy(endpoint);
        let err = client
            .query_contract_smart("stars1market", br#"{"ask_count":{}}"#)
            .await
            .unwrap_err();
        assert!(matches!(err, endpoints::QueryError::RPCError(_)));
        assert!(!err.is_not_found());
    }
}
