use soroban_sdk::{contracttype, Address, BytesN};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositEvent {
    pub from: Address,
    pub to: Address,
    pub amount: i128,
    pub desc: BytesN<32>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawEvent {
    pub from: Address,
    pub to: Address,
    pub amount: i128,
    pub desc: BytesN<32>,
}

/// No `to`: capital always lands on the Sportsplex account.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RaiseCapitalEvent {
    pub from: Address,
    pub amount: i128,
    pub desc: BytesN<32>,
}
