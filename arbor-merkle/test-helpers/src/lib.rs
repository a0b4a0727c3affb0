pub mod binary;
pub mod data;
pub mod transactions;

/// Sample transaction records, one per line of a generated data file.
pub const TEST_DATA: [&str; 10] = [
    "From: 0x108a62c6cd1c2a84c17736e52c7d92960b26af55, To: 0x081c215b9665db6cf1b46414b95adc193dc2b8f6, ETH: 0.668486374749",
    "From: 0xb09387d76772f67fde196bedef44609b2e98d03e, To: 0x3798ecdb690bb1032fe1272ab9ca7a9237b87217, ETH: 0.970741064563",
    "From: 0x09efd65cb2c98b94c581f625fc35ad1929ba6298, To: 0xfd7f40362edb56f1505e2886d40911d72e556c50, ETH: 0.850225331564",
    "From: 0x4d0932a5ea3824cc6218cf64a42fd5b6a5492342, To: 0xde99c106b531b162d4a6f2c3049d4f340262b4b4, ETH: 0.963277217455",
    "From: 0x8ec793802150ca5ed2321e04f0f8a9df53ba5cdc, To: 0xad79eb97482f805f8f45ddfa10441e11b69dc3bb, ETH: 0.684600495656",
    "From: 0x8f8379b27033f2593538f0b4fd4a5847e0743a0b, To: 0xc55852d137d008a63b2fc297aa4257da0625e6da, ETH: 0.691929737321",
    "From: 0xbf1777cf849f1740832d0cabce7b8003dd67a200, To: 0x821e93e05b19b2c0675518f7678bbbc03fda9c5d, ETH: 0.404988127157",
    "From: 0xc4ef6c7b70167e268f380b3a972d62a939e885d1, To: 0xafff4e7303dad0acba8130b02a300c0c65dfe78e, ETH: 0.123057850526",
    "From: 0x27720e56e7dec077031b7341524566c9709470fa, To: 0x4cd3931d2e21e75d313af90432e9c17cf7e4f529, ETH: 0.924772623330",
    "From: 0x230659fb7d68d6be0666e17e8e8025ab2d612e88, To: 0x1a0f2ed6cd10b4a9872a52cdc1db37589c9acc46, ETH: 0.600384253283",
];
