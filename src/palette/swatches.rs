//! The swatch table offered by the color picker, row-major in rows of 14.

/// Number of swatches per picker row.
pub const SWATCH_COLUMNS: usize = 14;

/// Packed `0xRRGGBB` swatch values.
pub const SWATCHES: [u32; 140] = [
    0x000000, 0x696969, 0x808080, 0xa9a9a9, 0xc0c0c0, 0xd3d3d3, 0xdcdcdc,
    0xf5f5f5, 0xffffff, 0xfffafa, 0xf8f8ff, 0xfffaf0, 0xfaf0e6, 0xfaebd7,
    0xffefd5, 0xffebcd, 0xffe4c4, 0xffe4b5, 0xffdead, 0xffdab9, 0xffe4e1,
    0xfff0f5, 0xfff5ee, 0xfdf5e6, 0xfffff0, 0xf0fff0, 0xf5fffa, 0xf0ffff,
    0xf0f8ff, 0xe6e6fa, 0xb0c4de, 0x778899, 0x708090, 0x4682b4, 0x4169e1,
    0x191970, 0x000080, 0x00008b, 0x0000cd, 0x0000ff, 0x1e90ff, 0x6495ed,
    0x00bfff, 0x87cefa, 0x87ceeb, 0xadd8e6, 0xb0e0e6, 0xafeeee, 0xe0ffff,
    0x00ffff, 0x00ffff, 0x40e0d0, 0x48d1cc, 0x00ced1, 0x20b2aa, 0x5f9ea0,
    0x008b8b, 0x008080, 0x2f4f4f, 0x006400, 0x008000, 0x228b22, 0x2e8b57,
    0x3cb371, 0x66cdaa, 0x8fbc8f, 0x7fffd4, 0x98fb98, 0x90ee90, 0x00ff7f,
    0x00fa9a, 0x7cfc00, 0x7fff00, 0xadff2f, 0x00ff00, 0x32cd32, 0x9acd32,
    0x556b2f, 0x6b8e23, 0x808000, 0xbdb76b, 0xeee8aa, 0xfff8dc, 0xf5f5dc,
    0xffffe0, 0xfafad2, 0xfffacd, 0xf5deb3, 0xdeb887, 0xd2b48c, 0xf0e68c,
    0xffff00, 0xffd700, 0xffa500, 0xf4a460, 0xff8c00, 0xdaa520, 0xcd853f,
    0xb8860b, 0xd2691e, 0xa0522d, 0x8b4513, 0x800000, 0x8b0000, 0xa52a2a,
    0xb22222, 0xcd5c5c, 0xbc8f8f, 0xe9967a, 0xf08080, 0xfa8072, 0xffa07a,
    0xff7f50, 0xff6347, 0xff4500, 0xff0000, 0xdc143c, 0xc71585, 0xff1493,
    0xff69b4, 0xdb7093, 0xffc0cb, 0xffb6c1, 0xd8bfd8, 0xff00ff, 0xff00ff,
    0xee82ee, 0xdda0dd, 0xda70d6, 0xba55d3, 0x9932cc, 0x9400d3, 0x8b008b,
    0x800080, 0x4b0082, 0x483d8b, 0x8a2be2, 0x9370db, 0x6a5acd, 0x7b68ee,
];
