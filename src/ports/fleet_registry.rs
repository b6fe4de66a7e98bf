use crate::domain::{LicensePlate, Vehicle};

/// フリート登録簿ポート
///
/// 固定フリートの車両と、その貸出状態を保持する。
/// 車両の追加・削除は行わない。
pub trait FleetRegistry: Send + Sync {
    /// すべての車両を作成順に返す
    fn list_all(&self) -> &[Vehicle];

    /// ナンバープレート（完全一致）で車両を検索する
    fn find_by_plate(&self, plate: &LicensePlate) -> Option<&Vehicle>;

    /// ナンバープレートで車両を検索し、可変参照を返す
    ///
    /// 予約登録時に貸出状態を更新するためだけに使われる。
    /// 呼び出し側は書き込みロックを保持していること。
    fn find_by_plate_mut(&mut self, plate: &LicensePlate) -> Option<&mut Vehicle>;
}
