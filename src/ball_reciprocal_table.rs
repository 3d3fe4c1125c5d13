// 8192 / sqrt(1 - (i / 32)^2) for i in 0..32, truncated, then a saturating
// sentinel standing in for the singularity at i = 32
pub static BALL_RECIPROCAL_TABLE: [i32; 33] = [
     8192,  8196,  8208,  8228,  8256,  8293,  8339,  8395,  8460,  8536,
     8623,  8723,  8836,  8965,  9110,  9273,  9459,  9669,  9908, 10180,
    10494, 10856, 11280, 11782, 12385, 13123, 14052, 15262, 16921, 19378,
    23541, 33027, 65535,
];
