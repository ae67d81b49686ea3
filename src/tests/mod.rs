mod report_tests;
mod service_tests;

use crate::ledger::Ledger;
use crate::models::{Member, MemberId};

pub struct Concert {
    pub ledger: Ledger,
    pub annie: MemberId,
    pub sally: MemberId,
    pub bill: MemberId,
}

/// Annie, Sally and Bill with no transactions yet.
pub fn concert_members() -> (Vec<Member>, MemberId, MemberId, MemberId) {
    let annie = Member::new("Annie");
    let sally = Member::new("Sally");
    let bill = Member::new("Bill");
    let ids = (annie.id(), sally.id(), bill.id());
    (vec![annie, sally, bill], ids.0, ids.1, ids.2)
}

/// The concert event with all four contributions recorded.
pub fn concert() -> Concert {
    let (members, annie, sally, bill) = concert_members();
    let mut ledger = Ledger::new("Concert", members).unwrap();
    ledger.add_transaction("tickets", 180, annie).unwrap();
    ledger.add_transaction("dinner", 75, sally).unwrap();
    ledger.add_transaction("drinks", 19, bill).unwrap();
    ledger.add_transaction("taxi", 16, bill).unwrap();
    Concert {
        ledger,
        annie,
        sally,
        bill,
    }
}

pub fn balance_of(ledger: &Ledger, id: MemberId) -> rust_decimal::Decimal {
    ledger.member(id).unwrap().balance()
}
