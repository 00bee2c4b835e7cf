use chrono::NaiveDate;

use crate::types::User;

/// Recovery window between whole-blood donations, in days. The server
/// owns the verdict; this mirror only drives the countdown display.
pub const RECOVERY_DAYS: i64 = 90;

#[derive(Debug, Clone, PartialEq)]
pub struct CooldownStatus {
    pub can_donate: bool,
    pub remaining_days: i64,
    pub progress_pct: u8,
}

pub fn cooldown_status(next_donation_date: Option<NaiveDate>, today: NaiveDate) -> CooldownStatus {
    let remaining_days = next_donation_date
        .map(|next| (next - today).num_days().max(0))
        .unwrap_or(0);

    let elapsed = (RECOVERY_DAYS - remaining_days).clamp(0, RECOVERY_DAYS);
    let progress_pct = (elapsed * 100 / RECOVERY_DAYS) as u8;

    CooldownStatus {
        can_donate: remaining_days == 0,
        remaining_days,
        progress_pct,
    }
}

/// Required donor fields; gates most authenticated features.
pub fn profile_complete(user: &User) -> bool {
    let filled = |field: &Option<String>| field.as_deref().is_some_and(|v| !v.trim().is_empty());

    !user.name.trim().is_empty()
        && filled(&user.blood_type)
        && filled(&user.phone)
        && filled(&user.city)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn donor(blood_type: Option<&str>, phone: Option<&str>, city: Option<&str>) -> User {
        User {
            id: "u1".to_string(),
            name: "Ana Pop".to_string(),
            email: "ana@example.com".to_string(),
            role: "user".to_string(),
            blood_type: blood_type.map(str::to_string),
            phone: phone.map(str::to_string),
            city: city.map(str::to_string),
            created_at: None,
        }
    }

    #[test]
    fn future_date_blocks_donation_with_exact_day_count() {
        let today = date(2026, 3, 1);
        let status = cooldown_status(Some(date(2026, 3, 11)), today);

        assert!(!status.can_donate);
        assert_eq!(status.remaining_days, 10);
    }

    #[test]
    fn past_date_means_eligible_now() {
        let today = date(2026, 3, 1);
        let status = cooldown_status(Some(date(2026, 2, 1)), today);

        assert!(status.can_donate);
        assert_eq!(status.remaining_days, 0);
        assert_eq!(status.progress_pct, 100);
    }

    #[test]
    fn missing_date_means_eligible_now() {
        let status = cooldown_status(None, date(2026, 3, 1));

        assert!(status.can_donate);
        assert_eq!(status.remaining_days, 0);
        assert_eq!(status.progress_pct, 100);
    }

    #[test]
    fn progress_reflects_elapsed_share_of_window() {
        let today = date(2026, 3, 1);
        // 45 of 90 days left
        let status = cooldown_status(Some(date(2026, 4, 15)), today);
        assert_eq!(status.remaining_days, 45);
        assert_eq!(status.progress_pct, 50);

        // day of the last donation itself: full window remaining
        let fresh = cooldown_status(Some(date(2026, 5, 30)), today);
        assert_eq!(fresh.remaining_days, 90);
        assert_eq!(fresh.progress_pct, 0);
    }

    #[test]
    fn remaining_beyond_window_clamps_progress_to_zero() {
        let status = cooldown_status(Some(date(2026, 9, 1)), date(2026, 3, 1));
        assert!(status.remaining_days > RECOVERY_DAYS);
        assert_eq!(status.progress_pct, 0);
    }

    #[test]
    fn complete_profile_needs_all_donor_fields() {
        assert!(profile_complete(&donor(Some("O+"), Some("0721234567"), Some("Cluj"))));
        assert!(!profile_complete(&donor(None, Some("0721234567"), Some("Cluj"))));
        assert!(!profile_complete(&donor(Some("O+"), Some("  "), Some("Cluj"))));
        assert!(!profile_complete(&donor(Some("O+"), Some("0721234567"), None)));
    }
}
