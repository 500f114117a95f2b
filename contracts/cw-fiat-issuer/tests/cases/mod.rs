mod minters;
mod ownership;
mod roles;
