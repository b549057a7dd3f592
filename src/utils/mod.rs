pub mod token;

/// Random hex secret for a single server session, used when no mint secret
/// is configured.
pub fn generate_session_secret() -> String {
    format!("{:032x}", rand::random::<u128>())
}
