#![allow(dead_code)]

use graphql_selection::{graphql_arguments, graphql_object, graphql_union, Union};

graphql_object! {
    pub struct Block {
        id: String => "id" scalar,
        header: Header => "header" object,
        transactions: Vec<Transaction> => "transactions" object,
    }
}

graphql_object! {
    pub struct Header {
        height: String => "height" scalar,
    }
}

graphql_object! {
    pub struct Transaction {
        id: String => "id" scalar,
        status: Union<Status> => "status" union,
    }
}

graphql_object! {
    pub struct Pending {
        time: String => "time" scalar,
    }
}

graphql_object! {
    pub struct Done {
        transaction_id: String => "transactionId" scalar,
        block: Option<Box<Block>> => "block" object,
        receipts: Vec<Option<i32>> => "receipts" scalar,
    }
}

graphql_union! {
    pub enum Status {
        Pending,
        Done,
    }
}

graphql_arguments! {
    pub struct BlockArguments {
        id: Option<String> => "id",
        height: Option<u32> => "height",
    }
}

graphql_object! {
    pub struct X {
        name: String => "name" scalar,
        y: Option<Box<Y>> => "y" object,
    }
}

graphql_object! {
    pub struct Y {
        id: String => "id" scalar,
        x: Option<Box<X>> => "x" object,
        xs: Vec<X> => "xs" object,
    }
}
