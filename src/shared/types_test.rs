//! Test to trigger ts-rs bindings export
//! Run with: cargo test export_bindings

#[cfg(test)]
mod tests {
    use ts_rs::TS;

    use crate::shared::types::*;

    #[test]
    fn export_bindings() {
        // This test triggers ts-rs to export TypeScript bindings
        ActionType::export().expect("Failed to export ActionType");
        CommandItem::export().expect("Failed to export CommandItem");
        ExecuteActionResponse::export().expect("Failed to export ExecuteActionResponse");
    }
}
