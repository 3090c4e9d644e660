//! Built-in chord tables.

/// The three chords of the Ice patch.
pub const ICE_CHORDS: &[&[[f32; 3]]] = &[
    &[[880.0, 0.5, 1.0], [1320.0, 0.5, 0.9], [1650.0, 0.9, 1.5], [2200.0, 1.8, 1.4], [1980.0, 0.5, 2.3]],
    &[[440.0, 0.5, 0.5], [660.0, 0.5, 0.5], [1650.0, 0.5, 1.5], [2200.0, 0.5, 1.4], [990.0, 0.5, 1.3]],
    &[[660.0, 0.5, 0.5], [880.0, 0.5, 0.5], [1870.0, 0.5, 1.5], [2420.0, 0.5, 1.4], [1210.0, 0.5, 1.3]],
];

/// Chords for the crack piece, one per crack event.
pub const CRACK_CHORDS: &[&[[f32; 3]]] = &[
    &[[330.0, 1.8, 1.5], [660.0, 0.9, 1.0], [825.0, 1.8, 1.4]],
    &[[587.3, 1.2, 0.4], [2202.5, 0.4, 0.4], [2936.6, 0.8, 1.5]],
    &[[784.0, 1.2, 0.9], [2352.0, 0.6, 2.0], [3528.0, 1.8, 1.3]],
    &[[246.9, 1.8, 1.3], [555.6, 0.9, 2.3], [987.8, 0.9, 2.0]],
    &[[659.2, 0.5, 1.3], [1483.3, 0.4, 1.3], [3296.2, 1.2, 2.0], [3955.4, 1.8, 1.0]],
    &[[1320.0, 1.5, 0.5], [1980.0, 1.2, 2.3], [2640.0, 0.9, 1.0], [4400.0, 0.6, 2.0]],
    &[[261.6, 1.5, 1.0], [654.0, 1.2, 1.0], [784.9, 1.8, 0.9], [1177.3, 0.4, 0.9]],
    &[[1396.9, 1.5, 0.4], [1746.1, 0.5, 2.0], [2619.2, 0.4, 0.5], [2793.8, 0.8, 2.0]],
    &[[880.0, 0.3, 2.3], [1650.0, 0.8, 2.3], [1760.0, 1.8, 1.5], [1980.0, 0.9, 0.4], [2200.0, 0.6, 0.9]],
    &[[587.3, 0.6, 0.7], [660.7, 0.4, 0.7], [881.0, 0.9, 2.0], [1101.2, 1.2, 0.5], [1321.5, 0.8, 1.5]],
    &[[784.0, 0.3, 1.0], [1176.0, 0.3, 0.7], [1568.0, 0.5, 2.0], [2940.0, 1.5, 0.9], [3920.0, 1.5, 2.0]],
    &[[493.9, 0.5, 2.0], [740.8, 0.9, 0.4], [1975.5, 0.6, 0.4], [2469.4, 1.2, 0.5], [2963.3, 0.3, 0.5]],
    &[[329.6, 1.8, 0.7], [494.4, 1.8, 2.3], [824.0, 0.8, 2.3], [1318.5, 0.4, 2.3], [1483.3, 1.5, 1.3], [1977.7, 1.8, 0.4]],
    &[[1320.0, 1.5, 2.3], [1760.0, 0.5, 0.5], [2200.0, 1.8, 0.5], [2640.0, 1.5, 1.5], [3300.0, 0.3, 1.4], [4400.0, 1.8, 0.5]],
    &[[784.9, 0.9, 1.3], [1308.1, 0.5, 1.5], [1962.2, 0.3, 2.3], [2093.0, 0.4, 1.5], [2354.6, 1.5, 1.0], [2616.2, 1.8, 0.4]],
    &[[349.2, 1.8, 1.5], [698.4, 1.2, 0.5], [785.7, 0.4, 2.0], [873.1, 1.5, 2.0], [1309.6, 0.9, 2.3], [1571.5, 0.8, 1.4]],
    &[[660.0, 0.9, 2.0], [880.0, 0.9, 0.5], [990.0, 0.4, 2.3], [1100.0, 1.2, 1.3], [1980.0, 0.3, 1.3], [2200.0, 0.3, 1.4], [2640.0, 0.8, 1.0]],
    &[[1174.6, 1.5, 1.5], [1321.5, 0.9, 0.4], [1468.3, 0.5, 2.3], [1762.0, 1.5, 0.4], [2202.5, 0.3, 1.4], [2349.3, 1.5, 2.0], [3523.9, 1.5, 2.3]],
    &[[392.0, 0.9, 1.5], [588.0, 1.2, 0.9], [882.0, 1.8, 2.3], [980.0, 1.8, 1.0], [1764.0, 0.9, 2.0], [1960.0, 0.3, 2.3], [2352.0, 1.2, 2.3]],
    &[[987.8, 0.3, 0.7], [1111.2, 0.5, 2.3], [1481.6, 0.4, 1.5], [1852.0, 1.2, 0.4], [1975.5, 0.6, 1.5], [2469.4, 0.5, 2.3], [2963.3, 1.2, 0.4]],
    &[[988.9, 1.8, 1.4], [1318.5, 0.3, 1.4], [3296.2, 1.5, 1.5]],
    &[[660.0, 1.8, 1.4], [1320.0, 0.4, 0.5], [2640.0, 1.2, 1.4]],
    &[[784.9, 1.5, 1.5], [1046.5, 1.5, 2.3], [2354.6, 0.4, 1.4]],
    &[[2095.3, 1.2, 0.9], [3143.0, 0.9, 1.4], [4190.6, 0.4, 0.7]],
    &[[330.0, 1.5, 0.5], [550.0, 0.9, 0.4], [660.0, 1.2, 2.3], [880.0, 0.4, 2.3]],
    &[[1321.5, 0.8, 2.0], [1468.3, 0.4, 2.0], [2642.9, 0.3, 1.0], [3523.9, 0.5, 1.5]],
    &[[784.0, 1.2, 2.3], [1764.0, 0.6, 2.0], [2940.0, 0.9, 0.5], [3136.0, 0.9, 0.5]],
    &[[370.4, 0.5, 0.5], [493.9, 0.5, 2.0], [555.6, 0.5, 0.7], [1234.7, 0.4, 0.5]],
    &[[659.2, 1.2, 1.0], [1318.5, 1.8, 0.9], [1977.7, 0.9, 0.5], [2472.2, 0.9, 0.5], [3296.2, 0.3, 0.9]],
    &[[1320.0, 0.9, 1.4], [1760.0, 1.8, 2.0], [2640.0, 0.9, 2.0], [3300.0, 1.8, 1.4], [3960.0, 1.5, 1.4]],
    &[[261.6, 0.9, 0.4], [392.4, 1.2, 0.5], [981.1, 1.5, 2.3], [1046.5, 0.4, 0.5], [1569.7, 0.9, 1.4]],
    &[[698.4, 1.8, 1.5], [1396.9, 1.8, 0.5], [1571.5, 0.6, 0.9], [2095.3, 0.3, 2.0], [2619.2, 1.5, 1.3]],
    &[[440.0, 0.8, 0.4], [660.0, 0.3, 1.0], [880.0, 0.9, 0.9], [1100.0, 1.8, 0.9], [1320.0, 0.9, 1.3], [2640.0, 0.5, 0.9]],
    &[[293.7, 0.8, 1.4], [734.2, 0.4, 1.4], [881.0, 1.2, 1.3], [1174.6, 1.5, 1.0], [1468.3, 0.3, 2.3], [1762.0, 1.5, 0.9]],
    &[[784.0, 1.2, 1.3], [1176.0, 1.8, 0.5], [1764.0, 0.9, 2.3], [1960.0, 0.9, 1.5], [2940.0, 0.4, 0.5], [3528.0, 1.5, 1.0]],
    &[[740.8, 0.6, 1.0], [987.8, 0.3, 0.5], [1111.2, 0.3, 1.0], [1852.0, 1.8, 0.9], [1975.5, 1.8, 1.3], [2222.5, 1.5, 0.9]],
    &[[329.6, 0.3, 0.5], [659.2, 0.3, 1.0], [824.0, 0.3, 2.3], [988.9, 0.6, 2.0], [1236.1, 0.3, 0.4], [1318.5, 1.8, 2.3], [1648.1, 0.3, 1.4]],
    &[[1320.0, 1.8, 1.3], [1980.0, 0.3, 0.5], [2200.0, 0.8, 2.3], [2640.0, 0.8, 0.4], [3300.0, 1.5, 1.5], [3520.0, 1.2, 1.3], [4400.0, 0.4, 1.0]],
    &[[784.9, 0.3, 0.4], [1046.5, 0.6, 0.7], [1177.3, 1.8, 0.9], [1569.7, 0.4, 0.4], [1962.2, 1.2, 1.4], [2354.6, 1.2, 1.4], [3139.4, 0.5, 0.7]],
    &[[523.8, 0.4, 0.4], [873.1, 0.6, 2.3], [1047.7, 0.5, 0.5], [1309.6, 0.3, 0.7], [1396.9, 0.4, 2.0], [1571.5, 0.5, 2.3], [2095.3, 0.8, 2.3]],
    &[[1650.0, 1.5, 2.3], [1980.0, 0.3, 0.7], [2200.0, 1.8, 2.3]],
    &[[1174.6, 0.4, 0.7], [1321.5, 0.8, 2.3], [3523.9, 1.5, 1.5]],
    &[[980.0, 1.2, 1.5], [1568.0, 0.5, 0.4], [1960.0, 1.2, 1.5]],
    &[[1481.6, 0.9, 2.0], [1852.0, 0.8, 1.0], [1975.5, 1.2, 1.4]],
    &[[659.2, 0.5, 1.5], [1648.1, 1.2, 0.5], [2966.6, 0.4, 2.3], [3296.2, 0.3, 1.3]],
    &[[440.0, 0.8, 1.3], [880.0, 0.5, 2.3], [1320.0, 0.3, 1.4], [2640.0, 1.5, 1.3]],
];
