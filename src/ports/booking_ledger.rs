use crate::domain::{Booking, BookingId};

/// 予約台帳ポート
///
/// 予約は追記専用ログに保存され、変更・削除不可。
/// 予約の順序は保持される。
pub trait BookingLedger: Send + Sync {
    /// 予約を末尾に追記する
    fn append(&mut self, booking: Booking);

    /// IDで予約を取得する
    fn get(&self, booking_id: BookingId) -> Option<&Booking>;

    /// すべての予約を追記順に返す
    fn all(&self) -> &[Booking];

    fn len(&self) -> usize {
        self.all().len()
    }

    fn is_empty(&self) -> bool {
        self.all().is_empty()
    }
}
