// What makes a good checkpoint block?
// + Is surrounded by blocks with reasonable timestamps
//   (no blocks before with a timestamp after, none after with
//    timestamp before)
// + Contains no strange transactions
pub(crate) const MAIN_CHECKPOINTS: &[(u32, &str)] = &[
    (0, "909884bf9643e40fb25906c979a4bedb1f033ffb49d9d102901f6de3dbacfe68"),
    (100, "3955072e57a568e296337499f3897b2cb4bd87a2a1d420777ab44eb02127fae8"),
    (200, "fb22cce7a2f9a52ef6eb1feb294f634dca16ec278333959ba677084f82d44565"),
    (300, "fa9bed5a2415ebb1e4428e68dbcd324b0db1593a7848afa4649ac85435c97160"),
    (400, "50b7d0beb8d13c55a28bcc23ed9fb8bd54d2392f19f2ae0feaa0b6d9e69422fb"),
    (500, "f854036dcfb48d471c402e6f94af48506e849d42c513549b7d372e8d24cd969c"),
    (600, "a2f511679b5895bca89fc74a8f694445d57adf13847fd140653e240ecddeffc0"),
    (700, "c46d3040715d6f815fafd72a7f8467a3e3a6f77775f0f8efc9133c8ceeea2afd"),
    (800, "a4a1398387be6b0b7898db08fc372d98bde09fff4204ccf19d787d83d7b23689"),
    (900, "967b63b89476c04e35d83fa3c735ba9c8c6d441e8bf35437c0a3c66cb21249d5"),
    (1000, "888f6b7a29e0d4863be66f12b35b90920560034d81448024f4e537e3cff99c14"),
    (1200, "7de2a7e2235d9c41c7ea4702024872796668e9d656586ac99a3eaba0eae97dc0"),
    (1400, "c3e9bf41e4a66d51c256a5bf08b1cbd67ca2d2107f0a76d3fab15126167ef356"),
    (1546, "8c7aed8732193fc7e35614a439d69fa38590ca1449abf1e7800f8e4628924705"),
];
pub(crate) const MAIN_LAST_CHECKPOINT_TIME: i64 = 1515765867;
/// the tx=... number in the SetBestChain debug.log lines
pub(crate) const MAIN_TRANSACTIONS_LAST_CHECKPOINT: u64 = 1547;
pub(crate) const MAIN_TRANSACTIONS_PER_DAY: f64 = 1000.0;

// Placeholder only, nothing has been curated for the test network yet.
pub(crate) const TEST_CHECKPOINTS: &[(u32, &str)] = &[(0, "")];
pub(crate) const TEST_LAST_CHECKPOINT_TIME: i64 = 0;
pub(crate) const TEST_TRANSACTIONS_LAST_CHECKPOINT: u64 = 0;
pub(crate) const TEST_TRANSACTIONS_PER_DAY: f64 = 0.0;
