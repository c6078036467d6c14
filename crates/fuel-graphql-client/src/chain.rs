use indoc::indoc;

use crate::{
    scalars::U32,
    types::{ChainInfo, Header},
    Client, Error,
};

#[derive(serde::Deserialize)]
struct ChainData {
    chain: ChainInfo,
}

impl Client {
    pub async fn get_latest_block_height(&self) -> Result<U32, Error> {
        let query = indoc! {r"
            {
              chain {
                latestBlock {
                  header {
                    height
                  }
                }
              }
            }
        "};

        let data: ChainData = self.execute_query(query).await?;

        Ok(data.chain.latest_block.header.height)
    }

    pub async fn get_latest_block_header(&self) -> Result<Header, Error> {
        let query = indoc! {r"
            {
              chain {
                latestBlock {
                  header {
                    id
                    daHeight
                    transactionsCount
                    messageReceiptCount
                    transactionsRoot
                    messageReceiptRoot
                    height
                    prevRoot
                    time
                    applicationHash
                  }
                }
              }
            }
        "};

        let data: ChainData = self.execute_query(query).await?;

        Ok(data.chain.latest_block.header)
    }

    pub async fn get_chain_name(&self) -> Result<String, Error> {
        let data: ChainData = self.execute_query("{ chain { name } }").await?;

        Ok(data.chain.name)
    }
}
