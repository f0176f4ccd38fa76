use crate::models::quota::Quota;

/// Minutes the user is expected to work today.
pub fn calculate_expected(quota: &Quota) -> i64 {
    quota.minutes()
}
