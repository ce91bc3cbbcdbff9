pub mod types;
pub mod utils;
pub mod env;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn health_serializes_status() {
        let body = serde_json::to_value(types::Health { status: "ok" }).unwrap();
        assert_eq!(body, serde_json::json!({"status": "ok"}));
    }

    #[test]
    fn ack_serializes_ok_flag() {
        let body = serde_json::to_value(types::Ack::ok()).unwrap();
        assert_eq!(body, serde_json::json!({"ok": true}));
    }
}
