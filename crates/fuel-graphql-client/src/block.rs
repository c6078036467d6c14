use std::collections::HashMap;

use graphql_selection::{QueryDocument, RootField, Suppression};

use crate::{
    types::{Block, Contract, FailureStatus, Header, QueryBlockParams, SuccessStatus, Transaction},
    Client, Error,
};

/// Controls how much of a block is fetched.
///
/// The default fetches the header only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetBlockOptions {
    /// Restricts the header to its id and height.
    pub header_only_id_height: bool,
    pub with_transactions: bool,
    pub with_consensus: bool,
    /// Restricts transactions to their id.
    pub transaction_only_id: bool,
    pub with_contract_bytecode: bool,
    pub with_contract_salt: bool,
}

impl GetBlockOptions {
    pub fn suppression(&self) -> Suppression {
        let mut rules = Vec::new();

        if !self.with_transactions {
            rules.push(Suppression::of::<Transaction>());
        }

        if !self.with_consensus {
            rules.push(Suppression::field_of::<Block>("consensus"));
        }

        if self.header_only_id_height {
            rules.push(Suppression::keep_only_of::<Header>(["id", "height"]));
        }

        if self.transaction_only_id {
            rules.push(Suppression::keep_only_of::<Transaction>(["id"]));
        } else {
            // Final statuses point back to their block.
            rules.push(Suppression::field_of::<SuccessStatus>("block"));
            rules.push(Suppression::field_of::<SuccessStatus>("receipts"));
            rules.push(Suppression::field_of::<FailureStatus>("block"));
            rules.push(Suppression::field_of::<FailureStatus>("receipts"));
        }

        if !self.with_contract_bytecode {
            rules.push(Suppression::field_of::<Contract>("bytecode"));
        }

        if !self.with_contract_salt {
            rules.push(Suppression::field_of::<Contract>("salt"));
        }

        Suppression::merge(rules)
    }

    pub(crate) fn root_field(&self, params: &QueryBlockParams) -> RootField {
        RootField::new::<Block>("block")
            .arguments(params)
            .suppress(self.suppression())
    }
}

#[derive(serde::Deserialize)]
struct BlockData {
    block: Option<Block>,
}

impl Client {
    /// Fetches one block, `None` when the node does not know it.
    pub async fn get_block(&self, params: &QueryBlockParams, options: GetBlockOptions) -> Result<Option<Block>, Error> {
        let query = QueryDocument::new().field(options.root_field(params)).to_string();
        let data: BlockData = self.execute_query(&query).await?;

        Ok(data.block)
    }

    /// Fetches several blocks in a single request.
    ///
    /// The result has one entry per element of `params`, in the same order.
    pub async fn get_blocks(
        &self,
        params: &[QueryBlockParams],
        options: GetBlockOptions,
    ) -> Result<Vec<Option<Block>>, Error> {
        if params.is_empty() {
            return Ok(Vec::new());
        }

        let document = blocks_document(params, options);
        let mut data: HashMap<String, Option<Block>> = self.execute_query(&document.to_string()).await?;

        let blocks = (0..params.len())
            .map(|i| data.remove(&block_alias(i)).flatten())
            .collect();

        Ok(blocks)
    }

    pub async fn get_block_header(&self, params: &QueryBlockParams) -> Result<Option<Header>, Error> {
        let block = self.get_block(params, GetBlockOptions::default()).await?;

        Ok(block.map(|block| block.header))
    }
}

fn block_alias(i: usize) -> String {
    format!("b{i}")
}

fn blocks_document(params: &[QueryBlockParams], options: GetBlockOptions) -> QueryDocument {
    params
        .iter()
        .enumerate()
        .fold(QueryDocument::new(), |document, (i, params)| {
            document.field(options.root_field(params).alias(block_alias(i)))
        })
}

#[cfg(test)]
mod tests {
    use graphql_selection::Layout;

    use super::*;

    #[test]
    fn header_only() {
        let query = QueryDocument::new()
            .field(GetBlockOptions::default().root_field(&QueryBlockParams::by_height(9758550)))
            .to_string();

        assert_eq!(
            query,
            r#"{ block(height: "9758550" ) { id header { id daHeight transactionsCount messageReceiptCount transactionsRoot messageReceiptRoot height prevRoot time applicationHash } } }"#
        );
    }

    #[test]
    fn transaction_ids_only() {
        let options = GetBlockOptions {
            header_only_id_height: true,
            with_transactions: true,
            with_consensus: true,
            transaction_only_id: true,
            ..Default::default()
        };

        assert_eq!(
            Layout::COMPACT.selection_set::<Block>(&options.suppression()),
            "id header { id height } consensus { __typename ... on Genesis { chainConfigHash coinsRoot contractsRoot messagesRoot } ... on PoAConsensus { signature } } transactions { id } "
        );
    }

    #[test]
    fn full_transactions_cut_the_status_cycle() {
        let options = GetBlockOptions {
            header_only_id_height: true,
            with_transactions: true,
            ..Default::default()
        };

        let selection = Layout::COMPACT.selection_set::<Block>(&options.suppression());

        assert!(selection.contains(
            "status { __typename ... on SubmittedStatus { time } ... on SuccessStatus { transactionId time programState { returnType data } } ... on SqueezedOutStatus { reason } ... on FailureStatus { transactionId time reason programState { returnType data } } }"
        ));
        assert!(selection.contains("inputContracts { id } "));
        assert!(!selection.contains("{ id bytecode salt }"));
        assert!(!selection.contains("consensus"));
    }

    #[test]
    fn batch_document() {
        let params = [QueryBlockParams::by_height(1), QueryBlockParams::by_height(2)];
        let options = GetBlockOptions {
            header_only_id_height: true,
            ..Default::default()
        };

        assert_eq!(
            blocks_document(&params, options).to_string(),
            r#"{ b0:block(height: "1" ) { id header { id height } } b1:block(height: "2" ) { id header { id height } } }"#
        );
    }
}
