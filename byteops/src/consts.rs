//! Named constants for every byte value.
//!
//! Each of the 256 possible values of `u8` is provided as a constant named
//! after its two-digit uppercase hexadecimal spelling, so code that builds
//! up byte tables can write `B0X7F` instead of repeating the literal.
#![allow(missing_docs)]

pub const B0X00: u8 = 0x00;
pub const B0X01: u8 = 0x01;
pub const B0X02: u8 = 0x02;
pub const B0X03: u8 = 0x03;
pub const B0X04: u8 = 0x04;
pub const B0X05: u8 = 0x05;
pub const B0X06: u8 = 0x06;
pub const B0X07: u8 = 0x07;
pub const B0X08: u8 = 0x08;
pub const B0X09: u8 = 0x09;
pub const B0X0A: u8 = 0x0A;
pub const B0X0B: u8 = 0x0B;
pub const B0X0C: u8 = 0x0C;
pub const B0X0D: u8 = 0x0D;
pub const B0X0E: u8 = 0x0E;
pub const B0X0F: u8 = 0x0F;
pub const B0X10: u8 = 0x10;
pub const B0X11: u8 = 0x11;
pub const B0X12: u8 = 0x12;
pub const B0X13: u8 = 0x13;
pub const B0X14: u8 = 0x14;
pub const B0X15: u8 = 0x15;
pub const B0X16: u8 = 0x16;
pub const B0X17: u8 = 0x17;
pub const B0X18: u8 = 0x18;
pub const B0X19: u8 = 0x19;
pub const B0X1A: u8 = 0x1A;
pub const B0X1B: u8 = 0x1B;
pub const B0X1C: u8 = 0x1C;
pub const B0X1D: u8 = 0x1D;
pub const B0X1E: u8 = 0x1E;
pub const B0X1F: u8 = 0x1F;
pub const B0X20: u8 = 0x20;
pub const B0X21: u8 = 0x21;
pub const B0X22: u8 = 0x22;
pub const B0X23: u8 = 0x23;
pub const B0X24: u8 = 0x24;
pub const B0X25: u8 = 0x25;
pub const B0X26: u8 = 0x26;
pub const B0X27: u8 = 0x27;
pub const B0X28: u8 = 0x28;
pub const B0X29: u8 = 0x29;
pub const B0X2A: u8 = 0x2A;
pub const B0X2B: u8 = 0x2B;
pub const B0X2C: u8 = 0x2C;
pub const B0X2D: u8 = 0x2D;
pub const B0X2E: u8 = 0x2E;
pub const B0X2F: u8 = 0x2F;
pub const B0X30: u8 = 0x30;
pub const B0X31: u8 = 0x31;
pub const B0X32: u8 = 0x32;
pub const B0X33: u8 = 0x33;
pub const B0X34: u8 = 0x34;
pub const B0X35: u8 = 0x35;
pub const B0X36: u8 = 0x36;
pub const B0X37: u8 = 0x37;
pub const B0X38: u8 = 0x38;
pub const B0X39: u8 = 0x39;
pub const B0X3A: u8 = 0x3A;
pub const B0X3B: u8 = 0x3B;
pub const B0X3C: u8 = 0x3C;
pub const B0X3D: u8 = 0x3D;
pub const B0X3E: u8 = 0x3E;
pub const B0X3F: u8 = 0x3F;
pub const B0X40: u8 = 0x40;
pub const B0X41: u8 = 0x41;
pub const B0X42: u8 = 0x42;
pub const B0X43: u8 = 0x43;
pub const B0X44: u8 = 0x44;
pub const B0X45: u8 = 0x45;
pub const B0X46: u8 = 0x46;
pub const B0X47: u8 = 0x47;
pub const B0X48: u8 = 0x48;
pub const B0X49: u8 = 0x49;
pub const B0X4A: u8 = 0x4A;
pub const B0X4B: u8 = 0x4B;
pub const B0X4C: u8 = 0x4C;
pub const B0X4D: u8 = 0x4D;
pub const B0X4E: u8 = 0x4E;
pub const B0X4F: u8 = 0x4F;
pub const B0X50: u8 = 0x50;
pub const B0X51: u8 = 0x51;
pub const B0X52: u8 = 0x52;
pub const B0X53: u8 = 0x53;
pub const B0X54: u8 = 0x54;
pub const B0X55: u8 = 0x55;
pub const B0X56: u8 = 0x56;
pub const B0X57: u8 = 0x57;
pub const B0X58: u8 = 0x58;
pub const B0X59: u8 = 0x59;
pub const B0X5A: u8 = 0x5A;
pub const B0X5B: u8 = 0x5B;
pub const B0X5C: u8 = 0x5C;
pub const B0X5D: u8 = 0x5D;
pub const B0X5E: u8 = 0x5E;
pub const B0X5F: u8 = 0x5F;
pub const B0X60: u8 = 0x60;
pub const B0X61: u8 = 0x61;
pub const B0X62: u8 = 0x62;
pub const B0X63: u8 = 0x63;
pub const B0X64: u8 = 0x64;
pub const B0X65: u8 = 0x65;
pub const B0X66: u8 = 0x66;
pub const B0X67: u8 = 0x67;
pub const B0X68: u8 = 0x68;
pub const B0X69: u8 = 0x69;
pub const B0X6A: u8 = 0x6A;
pub const B0X6B: u8 = 0x6B;
pub const B0X6C: u8 = 0x6C;
pub const B0X6D: u8 = 0x6D;
pub const B0X6E: u8 = 0x6E;
pub const B0X6F: u8 = 0x6F;
pub const B0X70: u8 = 0x70;
pub const B0X71: u8 = 0x71;
pub const B0X72: u8 = 0x72;
pub const B0X73: u8 = 0x73;
pub const B0X74: u8 = 0x74;
pub const B0X75: u8 = 0x75;
pub const B0X76: u8 = 0x76;
pub const B0X77: u8 = 0x77;
pub const B0X78: u8 = 0x78;
pub const B0X79: u8 = 0x79;
pub const B0X7A: u8 = 0x7A;
pub const B0X7B: u8 = 0x7B;
pub const B0X7C: u8 = 0x7C;
pub const B0X7D: u8 = 0x7D;
pub const B0X7E: u8 = 0x7E;
pub const B0X7F: u8 = 0x7F;
pub const B0X80: u8 = 0x80;
pub const B0X81: u8 = 0x81;
pub const B0X82: u8 = 0x82;
pub const B0X83: u8 = 0x83;
pub const B0X84: u8 = 0x84;
pub const B0X85: u8 = 0x85;
pub const B0X86: u8 = 0x86;
pub const B0X87: u8 = 0x87;
pub const B0X88: u8 = 0x88;
pub const B0X89: u8 = 0x89;
pub const B0X8A: u8 = 0x8A;
pub const B0X8B: u8 = 0x8B;
pub const B0X8C: u8 = 0x8C;
pub const B0X8D: u8 = 0x8D;
pub const B0X8E: u8 = 0x8E;
pub const B0X8F: u8 = 0x8F;
pub const B0X90: u8 = 0x90;
pub const B0X91: u8 = 0x91;
pub const B0X92: u8 = 0x92;
pub const B0X93: u8 = 0x93;
pub const B0X94: u8 = 0x94;
pub const B0X95: u8 = 0x95;
pub const B0X96: u8 = 0x96;
pub const B0X97: u8 = 0x97;
pub const B0X98: u8 = 0x98;
pub const B0X99: u8 = 0x99;
pub const B0X9A: u8 = 0x9A;
pub const B0X9B: u8 = 0x9B;
pub const B0X9C: u8 = 0x9C;
pub const B0X9D: u8 = 0x9D;
pub const B0X9E: u8 = 0x9E;
pub const B0X9F: u8 = 0x9F;
pub const B0XA0: u8 = 0xA0;
pub const B0XA1: u8 = 0xA1;
pub const B0XA2: u8 = 0xA2;
pub const B0XA3: u8 = 0xA3;
pub const B0XA4: u8 = 0xA4;
pub const B0XA5: u8 = 0xA5;
pub const B0XA6: u8 = 0xA6;
pub const B0XA7: u8 = 0xA7;
pub const B0XA8: u8 = 0xA8;
pub const B0XA9: u8 = 0xA9;
pub const B0XAA: u8 = 0xAA;
pub const B0XAB: u8 = 0xAB;
pub const B0XAC: u8 = 0xAC;
pub const B0XAD: u8 = 0xAD;
pub const B0XAE: u8 = 0xAE;
pub const B0XAF: u8 = 0xAF;
pub const B0XB0: u8 = 0xB0;
pub const B0XB1: u8 = 0xB1;
pub const B0XB2: u8 = 0xB2;
pub const B0XB3: u8 = 0xB3;
pub const B0XB4: u8 = 0xB4;
pub const B0XB5: u8 = 0xB5;
pub const B0XB6: u8 = 0xB6;
pub const B0XB7: u8 = 0xB7;
pub const B0XB8: u8 = 0xB8;
pub const B0XB9: u8 = 0xB9;
pub const B0XBA: u8 = 0xBA;
pub const B0XBB: u8 = 0xBB;
pub const B0XBC: u8 = 0xBC;
pub const B0XBD: u8 = 0xBD;
pub const B0XBE: u8 = 0xBE;
pub const B0XBF: u8 = 0xBF;
pub const B0XC0: u8 = 0xC0;
pub const B0XC1: u8 = 0xC1;
pub const B0XC2: u8 = 0xC2;
pub const B0XC3: u8 = 0xC3;
pub const B0XC4: u8 = 0xC4;
pub const B0XC5: u8 = 0xC5;
pub const B0XC6: u8 = 0xC6;
pub const B0XC7: u8 = 0xC7;
pub const B0XC8: u8 = 0xC8;
pub const B0XC9: u8 = 0xC9;
pub const B0XCA: u8 = 0xCA;
pub const B0XCB: u8 = 0xCB;
pub const B0XCC: u8 = 0xCC;
pub const B0XCD: u8 = 0xCD;
pub const B0XCE: u8 = 0xCE;
pub const B0XCF: u8 = 0xCF;
pub const B0XD0: u8 = 0xD0;
pub const B0XD1: u8 = 0xD1;
pub const B0XD2: u8 = 0xD2;
pub const B0XD3: u8 = 0xD3;
pub const B0XD4: u8 = 0xD4;
pub const B0XD5: u8 = 0xD5;
pub const B0XD6: u8 = 0xD6;
pub const B0XD7: u8 = 0xD7;
pub const B0XD8: u8 = 0xD8;
pub const B0XD9: u8 = 0xD9;
pub const B0XDA: u8 = 0xDA;
pub const B0XDB: u8 = 0xDB;
pub const B0XDC: u8 = 0xDC;
pub const B0XDD: u8 = 0xDD;
pub const B0XDE: u8 = 0xDE;
pub const B0XDF: u8 = 0xDF;
pub const B0XE0: u8 = 0xE0;
pub const B0XE1: u8 = 0xE1;
pub const B0XE2: u8 = 0xE2;
pub const B0XE3: u8 = 0xE3;
pub const B0XE4: u8 = 0xE4;
pub const B0XE5: u8 = 0xE5;
pub const B0XE6: u8 = 0xE6;
pub const B0XE7: u8 = 0xE7;
pub const B0XE8: u8 = 0xE8;
pub const B0XE9: u8 = 0xE9;
pub const B0XEA: u8 = 0xEA;
pub const B0XEB: u8 = 0xEB;
pub const B0XEC: u8 = 0xEC;
pub const B0XED: u8 = 0xED;
pub const B0XEE: u8 = 0xEE;
pub const B0XEF: u8 = 0xEF;
pub const B0XF0: u8 = 0xF0;
pub const B0XF1: u8 = 0xF1;
pub const B0XF2: u8 = 0xF2;
pub const B0XF3: u8 = 0xF3;
pub const B0XF4: u8 = 0xF4;
pub const B0XF5: u8 = 0xF5;
pub const B0XF6: u8 = 0xF6;
pub const B0XF7: u8 = 0xF7;
pub const B0XF8: u8 = 0xF8;
pub const B0XF9: u8 = 0xF9;
pub const B0XFA: u8 = 0xFA;
pub const B0XFB: u8 = 0xFB;
pub const B0XFC: u8 = 0xFC;
pub const B0XFD: u8 = 0xFD;
pub const B0XFE: u8 = 0xFE;
pub const B0XFF: u8 = 0xFF;
