//! PKCS#8 private keys exported by a native engine
//!
//! Each record was produced by a real PKCS#8 exporter; `d`, `x` and `y` are
//! the field elements it contains, in the record's fixed-length form.

use ecpair_api::CurveId;
use ecpair_keys::EcKeyPairData;

/// One exported key and its components, all hex-encoded
pub struct EcVector {
    pub curve: CurveId,
    pub der: &'static str,
    pub d: &'static str,
    pub x: &'static str,
    pub y: &'static str,
}

impl EcVector {
    pub fn der_bytes(&self) -> Vec<u8> {
        decode(self.der)
    }

    pub fn d_bytes(&self) -> Vec<u8> {
        decode(self.d)
    }

    pub fn x_bytes(&self) -> Vec<u8> {
        decode(self.x)
    }

    pub fn y_bytes(&self) -> Vec<u8> {
        decode(self.y)
    }

    /// The key pair held by this vector
    pub fn key(&self) -> EcKeyPairData {
        EcKeyPairData::new(self.d_bytes(), self.x_bytes(), self.y_bytes(), self.curve)
    }
}

fn decode(field: &str) -> Vec<u8> {
    hex::decode(field).expect("test vector hex is well-formed")
}

pub const P256: EcVector = EcVector {
    curve: CurveId::P256,
    der: concat!(
        "308187020100301306072a8648ce3d020106082a8648ce3d030107046d306b0201010420",
        "42676abe226e54e5e598404acda393f6bfae133373f6f5fbee3a9d4b907b132f",
        "a14403420004",
        "cef2c35ca392921390744c7f2d552eb431579bdc4e32f0107acd6f428aea1adc",
        "aa0cce9ca62062421bef5392da46fd1f688052baf05bd0ea6dad681123429218",
    ),
    d: "42676abe226e54e5e598404acda393f6bfae133373f6f5fbee3a9d4b907b132f",
    x: "cef2c35ca392921390744c7f2d552eb431579bdc4e32f0107acd6f428aea1adc",
    y: "aa0cce9ca62062421bef5392da46fd1f688052baf05bd0ea6dad681123429218",
};

pub const P384: EcVector = EcVector {
    curve: CurveId::P384,
    der: concat!(
        "3081b6020100301006072a8648ce3d020106052b8104002204819e30819b0201010430",
        "83279e443242632c8f2554c504613c3cc9ea6e01c423bda7a0853436f9eccb45abb16605998880491e5f911eea128313",
        "a16403620004",
        "50b83ec8d7794d4fb004aff07fdc80ce1e5853edc5d4659997586d5ae2ee1729eb329875c02f60e80c576e90071b7518",
        "637f9815522374d75566dc542bc5b376938bf4d4e220c18efaed067fcb547e33881595e52e87e68833a386f6bf40179c",
    ),
    d: "83279e443242632c8f2554c504613c3cc9ea6e01c423bda7a0853436f9eccb45abb16605998880491e5f911eea128313",
    x: "50b83ec8d7794d4fb004aff07fdc80ce1e5853edc5d4659997586d5ae2ee1729eb329875c02f60e80c576e90071b7518",
    y: "637f9815522374d75566dc542bc5b376938bf4d4e220c18efaed067fcb547e33881595e52e87e68833a386f6bf40179c",
};

/// The private scalar has a leading zero byte, so its minimal form is 65 bytes
pub const P521: EcVector = EcVector {
    curve: CurveId::P521,
    der: concat!(
        "3081ee020100301006072a8648ce3d020106052b810400230481d63081d30201010442",
        "008fe915d6ebb5f1f00be06c423b1130c14052ba5b2ee818288a491ca57fb30ef27cf725e98d303e3fb1f11be0ca4239093e437f8587b7611c64930b51a1112214b5",
        "a181890381860004",
        "012a25353ca3dbdb46490a788f3b20811b585562662e413004f00bd33f72847001895daa570303b1431b96ed0899050fb7905729fc09820c316f0409e9ab7cb98077",
        "017ef60b7ff63db4b590b0b772fd68124cb3249fa717ae1a572a5f2a9e5306e79f7e5d814fff337b7e0ec8586d1111bc4c0f47edf86a99ed05d08895e5f5fddb9385",
    ),
    d: "008fe915d6ebb5f1f00be06c423b1130c14052ba5b2ee818288a491ca57fb30ef27cf725e98d303e3fb1f11be0ca4239093e437f8587b7611c64930b51a1112214b5",
    x: "012a25353ca3dbdb46490a788f3b20811b585562662e413004f00bd33f72847001895daa570303b1431b96ed0899050fb7905729fc09820c316f0409e9ab7cb98077",
    y: "017ef60b7ff63db4b590b0b772fd68124cb3249fa717ae1a572a5f2a9e5306e79f7e5d814fff337b7e0ec8586d1111bc4c0f47edf86a99ed05d08895e5f5fddb9385",
};

/// Every vector, one per supported curve
pub const ALL: [EcVector; 3] = [P256, P384, P521];
