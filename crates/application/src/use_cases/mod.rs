mod handle_query;
mod reload_hosts;

pub use handle_query::HandleQueryUseCase;
pub use reload_hosts::ReloadHostsUseCase;
