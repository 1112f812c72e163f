//! IdGenerator port - ID 生成の抽象化
//!
//! IdGenerator は分散システムで使える ID を生成するためのインターフェースです。
//! テスト容易性のために、trait として抽象化しています。
//!
//! # 実装
//! - **UlidGenerator**: ULID ベース（本番用）

use ulid::Ulid;

use crate::domain::StudentId;
use crate::ports::Clock;

/// IdGenerator は一意な StudentId を生成
///
/// # 契約
/// - 返す id はグローバルに一意（削除済みの id も再利用しない）
/// - registry は衝突チェックをしないので、この契約が唯一の保証になる
///
/// # Thread Safety
/// - `Send + Sync` を要求（複数スレッドから使える）
pub trait IdGenerator: Send + Sync {
    fn generate_student_id(&self) -> StudentId;
}

/// UlidGenerator は ULID ベースの ID 生成器
///
/// Clock を使って現在時刻ベースの ULID を生成します。
/// 上位 48bit が時刻、下位 80bit が乱数です。
pub struct UlidGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidGenerator<C> {
    /// 新しい UlidGenerator を作成
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> IdGenerator for UlidGenerator<C> {
    fn generate_student_id(&self) -> StudentId {
        let ulid = Ulid::from_parts(self.clock.now_millis(), rand::random());
        StudentId::from_ulid(ulid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::STUDENT_ID_PREFIX;
    use crate::ports::{FixedClock, SystemClock};
    use chrono::{TimeZone, Utc};
    use std::collections::HashSet;
    use std::str::FromStr;

    #[test]
    fn ulid_generator_generates_unique_ids() {
        let id_gen = UlidGenerator::new(SystemClock);

        let ids: HashSet<StudentId> = (0..1_000).map(|_| id_gen.generate_student_id()).collect();
        assert_eq!(ids.len(), 1_000);
    }

    #[test]
    fn ulid_generator_with_fixed_clock_embeds_the_timestamp() {
        let fixed_time = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let id_gen = UlidGenerator::new(FixedClock::new(fixed_time));

        let id1 = id_gen.generate_student_id();
        let id2 = id_gen.generate_student_id();

        // FixedClock を使っても、ランダム部分があるので ID は異なる
        assert_ne!(id1, id2);

        let raw = id1.as_str().strip_prefix(STUDENT_ID_PREFIX).unwrap();
        let ulid = Ulid::from_str(raw).unwrap();
        assert_eq!(ulid.timestamp_ms(), fixed_time.timestamp_millis() as u64);
    }
}
