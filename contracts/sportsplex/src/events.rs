use soroban_sdk::{contracttype, Address, BytesN};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AddFundsEvent {
    pub customer: Address,
    pub amount: i128,
    pub desc: BytesN<32>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CancelAddFundsEvent {
    pub customer: Address,
    pub amount: i128,
    pub desc: BytesN<32>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PaymentEvent {
    pub customer: Address,
    pub amount: i128,
    pub desc: BytesN<32>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CancelPaymentEvent {
    pub customer: Address,
    pub amount: i128,
    pub desc: BytesN<32>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardEvent {
    pub customer: Address,
    pub amount: i128,
    pub desc: BytesN<32>,
}
