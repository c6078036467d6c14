//! Objects, unions and arguments of the Fuel GraphQL schema used by the client.

use graphql_selection::{graphql_arguments, graphql_object, graphql_union, Union};

use crate::scalars::{
    Address, AssetId, BlockId, Bytes32, ContractId, HexString, Nonce, ReceiptType, ReturnType, Salt, Signature,
    Tai64Timestamp, TransactionId, TxPointer, UtxoId, U32, U64,
};

graphql_object! {
    pub struct Block {
        id: BlockId => "id" scalar,
        header: Header => "header" object,
        consensus: Union<Consensus> => "consensus" union,
        transactions: Vec<Transaction> => "transactions" object,
    }
}

graphql_object! {
    pub struct Header {
        id: BlockId => "id" scalar,
        da_height: U64 => "daHeight" scalar,
        transactions_count: U64 => "transactionsCount" scalar,
        message_receipt_count: U64 => "messageReceiptCount" scalar,
        transactions_root: Bytes32 => "transactionsRoot" scalar,
        message_receipt_root: Bytes32 => "messageReceiptRoot" scalar,
        height: U32 => "height" scalar,
        prev_root: Bytes32 => "prevRoot" scalar,
        time: Tai64Timestamp => "time" scalar,
        application_hash: Bytes32 => "applicationHash" scalar,
    }
}

graphql_union! {
    pub enum Consensus {
        Genesis,
        PoAConsensus,
    }
}

graphql_object! {
    pub struct Genesis {
        chain_config_hash: Bytes32 => "chainConfigHash" scalar,
        coins_root: Bytes32 => "coinsRoot" scalar,
        contracts_root: Bytes32 => "contractsRoot" scalar,
        messages_root: Bytes32 => "messagesRoot" scalar,
    }
}

graphql_object! {
    pub struct PoAConsensus {
        signature: Signature => "signature" scalar,
    }
}

graphql_object! {
    pub struct Transaction {
        id: TransactionId => "id" scalar,
        input_asset_ids: Vec<AssetId> => "inputAssetIds" scalar,
        input_contracts: Vec<Contract> => "inputContracts" object,
        input_contract: Option<InputContract> => "inputContract" object,
        policies: Option<Policies> => "policies" object,
        gas_price: Option<U64> => "gasPrice" scalar,
        script_gas_limit: Option<U64> => "scriptGasLimit" scalar,
        maturity: Option<U32> => "maturity" scalar,
        mint_amount: Option<U64> => "mintAmount" scalar,
        mint_asset_id: Option<AssetId> => "mintAssetId" scalar,
        tx_pointer: Option<TxPointer> => "txPointer" scalar,
        is_script: bool => "isScript" scalar,
        is_create: bool => "isCreate" scalar,
        is_mint: bool => "isMint" scalar,
        inputs: Vec<Union<Input>> => "inputs" union,
        outputs: Vec<Union<Output>> => "outputs" union,
        output_contract: Option<ContractOutput> => "outputContract" object,
        witnesses: Vec<HexString> => "witnesses" scalar,
        receipts_root: Option<Bytes32> => "receiptsRoot" scalar,
        status: Union<TransactionStatus> => "status" union,
        receipts: Vec<Receipt> => "receipts" object,
        script: Option<HexString> => "script" scalar,
        script_data: Option<HexString> => "scriptData" scalar,
        bytecode_witness_index: Option<i32> => "bytecodeWitnessIndex" scalar,
        bytecode_length: Option<U64> => "bytecodeLength" scalar,
        salt: Option<Salt> => "salt" scalar,
        storage_slots: Vec<HexString> => "storageSlots" scalar,
        raw_payload: HexString => "rawPayload" scalar,
    }
}

graphql_object! {
    pub struct Contract {
        id: ContractId => "id" scalar,
        bytecode: HexString => "bytecode" scalar,
        salt: Salt => "salt" scalar,
    }
}

graphql_object! {
    pub struct Policies {
        gas_price: Option<U64> => "gasPrice" scalar,
        witness_limit: Option<U64> => "witnessLimit" scalar,
        maturity: Option<U32> => "maturity" scalar,
        max_fee: Option<U64> => "maxFee" scalar,
    }
}

graphql_union! {
    pub enum Input {
        InputCoin,
        InputContract,
        InputMessage,
    }
}

graphql_object! {
    pub struct InputCoin {
        utxo_id: UtxoId => "utxoId" scalar,
        owner: Address => "owner" scalar,
        amount: U64 => "amount" scalar,
        asset_id: AssetId => "assetId" scalar,
        tx_pointer: TxPointer => "txPointer" scalar,
        witness_index: i32 => "witnessIndex" scalar,
        maturity: U32 => "maturity" scalar,
        predicate_gas_used: U64 => "predicateGasUsed" scalar,
        predicate: HexString => "predicate" scalar,
        predicate_data: HexString => "predicateData" scalar,
    }
}

graphql_object! {
    pub struct InputContract {
        utxo_id: UtxoId => "utxoId" scalar,
        balance_root: Bytes32 => "balanceRoot" scalar,
        state_root: Bytes32 => "stateRoot" scalar,
        tx_pointer: TxPointer => "txPointer" scalar,
        contract: Contract => "contract" object,
    }
}

graphql_object! {
    pub struct InputMessage {
        sender: Address => "sender" scalar,
        recipient: Address => "recipient" scalar,
        amount: U64 => "amount" scalar,
        nonce: Nonce => "nonce" scalar,
        witness_index: i32 => "witnessIndex" scalar,
        predicate_gas_used: U64 => "predicateGasUsed" scalar,
        data: HexString => "data" scalar,
        predicate: HexString => "predicate" scalar,
        predicate_data: HexString => "predicateData" scalar,
    }
}

graphql_union! {
    pub enum Output {
        CoinOutput,
        ContractOutput,
        ChangeOutput,
        VariableOutput,
        ContractCreated,
    }
}

graphql_object! {
    pub struct CoinOutput {
        to: Address => "to" scalar,
        amount: U64 => "amount" scalar,
        asset_id: AssetId => "assetId" scalar,
    }
}

graphql_object! {
    pub struct ContractOutput {
        input_index: i32 => "inputIndex" scalar,
        balance_root: Bytes32 => "balanceRoot" scalar,
        state_root: Bytes32 => "stateRoot" scalar,
    }
}

graphql_object! {
    pub struct ChangeOutput {
        to: Address => "to" scalar,
        amount: U64 => "amount" scalar,
        asset_id: AssetId => "assetId" scalar,
    }
}

graphql_object! {
    pub struct VariableOutput {
        to: Address => "to" scalar,
        amount: U64 => "amount" scalar,
        asset_id: AssetId => "assetId" scalar,
    }
}

graphql_object! {
    pub struct ContractCreated {
        contract: Contract => "contract" object,
        state_root: Bytes32 => "stateRoot" scalar,
    }
}

graphql_union! {
    pub enum TransactionStatus {
        SubmittedStatus,
        SuccessStatus,
        SqueezedOutStatus,
        FailureStatus,
    }
}

graphql_object! {
    pub struct SubmittedStatus {
        time: Tai64Timestamp => "time" scalar,
    }
}

graphql_object! {
    pub struct SuccessStatus {
        transaction_id: TransactionId => "transactionId" scalar,
        block: Block => "block" object,
        time: Tai64Timestamp => "time" scalar,
        program_state: Option<ProgramState> => "programState" object,
        receipts: Vec<Receipt> => "receipts" object,
    }
}

graphql_object! {
    pub struct SqueezedOutStatus {
        reason: String => "reason" scalar,
    }
}

graphql_object! {
    pub struct FailureStatus {
        transaction_id: TransactionId => "transactionId" scalar,
        block: Block => "block" object,
        time: Tai64Timestamp => "time" scalar,
        reason: String => "reason" scalar,
        program_state: Option<ProgramState> => "programState" object,
        receipts: Vec<Receipt> => "receipts" object,
    }
}

graphql_object! {
    pub struct ProgramState {
        return_type: ReturnType => "returnType" scalar,
        data: HexString => "data" scalar,
    }
}

graphql_object! {
    /// Most fields are only set for some receipt types.
    pub struct Receipt {
        contract: Option<Contract> => "contract" object,
        pc: Option<U64> => "pc" scalar,
        is: Option<U64> => "is" scalar,
        to: Option<Contract> => "to" object,
        to_address: Option<Address> => "toAddress" scalar,
        amount: Option<U64> => "amount" scalar,
        asset_id: Option<AssetId> => "assetId" scalar,
        gas: Option<U64> => "gas" scalar,
        param1: Option<U64> => "param1" scalar,
        param2: Option<U64> => "param2" scalar,
        val: Option<U64> => "val" scalar,
        ptr: Option<U64> => "ptr" scalar,
        digest: Option<Bytes32> => "digest" scalar,
        reason: Option<U64> => "reason" scalar,
        ra: Option<U64> => "ra" scalar,
        rb: Option<U64> => "rb" scalar,
        rc: Option<U64> => "rc" scalar,
        rd: Option<U64> => "rd" scalar,
        len: Option<U64> => "len" scalar,
        receipt_type: ReceiptType => "receiptType" scalar,
        result: Option<U64> => "result" scalar,
        gas_used: Option<U64> => "gasUsed" scalar,
        data: Option<HexString> => "data" scalar,
        sender: Option<Address> => "sender" scalar,
        recipient: Option<Address> => "recipient" scalar,
        nonce: Option<Nonce> => "nonce" scalar,
        contract_id: Option<ContractId> => "contractId" scalar,
        sub_id: Option<Bytes32> => "subId" scalar,
    }
}

graphql_object! {
    pub struct ChainInfo {
        name: String => "name" scalar,
        latest_block: Block => "latestBlock" object,
        da_height: U64 => "daHeight" scalar,
    }
}

graphql_arguments! {
    /// Selects a block either by id or by height.
    pub struct QueryBlockParams {
        id: Option<BlockId> => "id",
        height: Option<U32> => "height",
    }
}

impl QueryBlockParams {
    pub fn by_id(id: BlockId) -> Self {
        QueryBlockParams {
            id: Some(id),
            height: None,
        }
    }

    pub fn by_height(height: u32) -> Self {
        QueryBlockParams {
            id: None,
            height: Some(U32(height)),
        }
    }
}

graphql_arguments! {
    pub struct QueryTransactionParams {
        id: Option<TransactionId> => "id",
    }
}

impl QueryTransactionParams {
    pub fn by_id(id: TransactionId) -> Self {
        QueryTransactionParams { id: Some(id) }
    }
}
