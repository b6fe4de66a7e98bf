use crate::domain::{Booking, BookingId};
use crate::ports::booking_ledger::BookingLedger as BookingLedgerTrait;
use std::collections::HashMap;

/// BookingLedgerのインメモリ実装
///
/// 追記順のVecと、ID→位置の索引を持つ。
#[derive(Default)]
pub struct BookingLedger {
    bookings: Vec<Booking>,
    index: HashMap<BookingId, usize>,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookingLedgerTrait for BookingLedger {
    fn append(&mut self, booking: Booking) {
        self.index.insert(booking.booking_id, self.bookings.len());
        self.bookings.push(booking);
    }

    fn get(&self, booking_id: BookingId) -> Option<&Booking> {
        self.index.get(&booking_id).map(|&i| &self.bookings[i])
    }

    fn all(&self) -> &[Booking] {
        &self.bookings
    }
}
