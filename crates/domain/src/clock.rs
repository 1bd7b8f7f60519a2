//! # Clock（時刻プロバイダ）
//!
//! タスクの `created_at` 採番をユースケース層から切り離し、
//! テストで時刻を制御できるようにするための抽象化。

use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

/// 現在時刻を提供するトレイト
pub trait Clock: Send + Sync {
   fn now(&self) -> DateTime<Utc>;
}

/// 実際のシステム時刻を返す実装
pub struct SystemClock;

impl Clock for SystemClock {
   fn now(&self) -> DateTime<Utc> {
      Utc::now()
   }
}

/// 固定時刻を返すテスト用実装
pub struct FixedClock {
   now: DateTime<Utc>,
}

impl FixedClock {
   pub fn new(now: DateTime<Utc>) -> Self {
      Self { now }
   }
}

impl Clock for FixedClock {
   fn now(&self) -> DateTime<Utc> {
      self.now
   }
}

/// 呼び出しごとに一定間隔だけ進む時刻を返すテスト用実装
///
/// 作成順と `created_at` の順序が一致することを検証するテストで使う。
pub struct SteppingClock {
   next: Mutex<DateTime<Utc>>,
   step: Duration,
}

impl SteppingClock {
   pub fn new(start: DateTime<Utc>, step: Duration) -> Self {
      Self {
         next: Mutex::new(start),
         step,
      }
   }
}

impl Clock for SteppingClock {
   fn now(&self) -> DateTime<Utc> {
      // ロック汚染時も時刻自体は有効なので値を取り出して続行する
      let mut next = self.next.lock().unwrap_or_else(|e| e.into_inner());
      let now = *next;
      *next = now + self.step;
      now
   }
}
