mod fault_message;
mod into_error_details;
