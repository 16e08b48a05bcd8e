#![no_main]

use dotnames::prelude::*;
use libfuzzer_sys::fuzz_target;
use strum::IntoEnumIterator;

fuzz_target!(|data: &[u8]| {
    let Ok(id) = std::str::from_utf8(data) else {
        return;
    };
    for kind in NameKind::iter() {
        let name = AnyName::parse(kind, id);
        let _ = name.anonymize();
    }
});
