use soroban_sdk::{token, Address, Env};

// Pay the seller directly (settlement at bid time)
pub fn transfer_between(env: &Env, token: &Address, from: &Address, to: &Address, amount: &i128) {
    token::Client::new(env, token).transfer(from, to, amount);
}

// Escrow the payment in the contract
pub fn transfer_to_contract(env: &Env, token: &Address, from: &Address, amount: &i128) {
    token::Client::new(env, token).transfer(from, &env.current_contract_address(), amount);
}

// Release escrowed funds from the contract
pub fn transfer_from_contract(env: &Env, token: &Address, to: &Address, amount: &i128) {
    token::Client::new(env, token).transfer(&env.current_contract_address(), to, amount);
}

// Token balance of an account
pub fn balance(env: &Env, token: &Address, owner: &Address) -> i128 {
    token::Client::new(env, token).balance(owner)
}
