use graphql_selection::{QueryDocument, RootField, Suppression};

use crate::{
    types::{Block, Contract, QueryTransactionParams, Receipt, Transaction},
    Client, Error,
};

/// Controls how much of a transaction is fetched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetTransactionOptions {
    pub with_receipts: bool,
    pub with_status: bool,
    pub with_contract_bytecode: bool,
    pub with_contract_salt: bool,
}

impl GetTransactionOptions {
    /// The block of a final status never lists its transactions.
    pub fn suppression(&self) -> Suppression {
        let mut rules = vec![Suppression::field_of::<Block>("transactions")];

        if !self.with_contract_bytecode {
            rules.push(Suppression::field_of::<Contract>("bytecode"));
        }

        if !self.with_contract_salt {
            rules.push(Suppression::field_of::<Contract>("salt"));
        }

        if !self.with_receipts {
            rules.push(Suppression::of::<Receipt>());
        }

        if !self.with_status {
            rules.push(Suppression::field_of::<Transaction>("status"));
        }

        Suppression::merge(rules)
    }

    fn root_field(&self, params: &QueryTransactionParams) -> RootField {
        RootField::new::<Transaction>("transaction")
            .arguments(params)
            .suppress(self.suppression())
    }
}

#[derive(serde::Deserialize)]
struct TransactionData {
    transaction: Option<Transaction>,
}

impl Client {
    /// Fetches one transaction, `None` when the node does not know it.
    pub async fn get_transaction(
        &self,
        params: &QueryTransactionParams,
        options: GetTransactionOptions,
    ) -> Result<Option<Transaction>, Error> {
        let query = QueryDocument::new().field(options.root_field(params)).to_string();
        let data: TransactionData = self.execute_query(&query).await?;

        Ok(data.transaction)
    }
}
