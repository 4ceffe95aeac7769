#![no_main]

use libfuzzer_sys::fuzz_target;

use crt_accounts::{AccountRecord, ChronoExtension, DecayPool, Mint, TokenAccount};

// Decoding arbitrary bytes as any ledger record must never panic, and
// anything that decodes must encode back to a record that decodes equal.
fuzz_target!(|data: &[u8]| {
    if let Ok(account) = TokenAccount::from_bytes(data) {
        let bytes = account.to_bytes().expect("decoded account re-encodes");
        let again = TokenAccount::from_bytes(&bytes).expect("re-encoded account decodes");
        assert_eq!(again.key, account.key);
        assert_eq!(again.state, account.state);
        assert_eq!(again.current_chrono_equation, account.current_chrono_equation);
    }
    let _ = ChronoExtension::from_bytes(data);
    let _ = Mint::from_bytes(data);
    let _ = DecayPool::from_bytes(data);
});
