#![no_main]
use hl7map::Parser;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut parser = Parser::new(data);
    let _ = parser.parse();
});
