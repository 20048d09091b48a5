// Adapter Pattern: charge an old MicroUSB phone through a Type-C interface.

use std::io::{self, Write};

// Target interface the rest of the code expects
pub trait TypeCCharger {
    fn charge_with_type_c(&self, out: &mut dyn Write) -> io::Result<()>;
}

// Legacy device with a different interface
pub struct OldMicroUsbPhone;

impl OldMicroUsbPhone {
    pub fn charge_with_micro_usb(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Charging phone with MicroUSB port.")
    }
}

pub struct MicroUsbToTypeCAdapter {
    phone: OldMicroUsbPhone,
}

impl MicroUsbToTypeCAdapter {
    pub fn new(phone: OldMicroUsbPhone) -> Self {
        Self { phone }
    }

    pub fn into_inner(self) -> OldMicroUsbPhone {
        self.phone
    }
}

impl TypeCCharger for MicroUsbToTypeCAdapter {
    fn charge_with_type_c(&self, out: &mut dyn Write) -> io::Result<()> {
        self.phone.charge_with_micro_usb(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn charge_via(charger: &dyn TypeCCharger) -> Vec<u8> {
        let mut out = Vec::new();
        charger.charge_with_type_c(&mut out).unwrap();
        out
    }

    #[test]
    fn test_adapter_matches_legacy_output() {
        let mut direct = Vec::new();
        OldMicroUsbPhone.charge_with_micro_usb(&mut direct).unwrap();

        let adapter = MicroUsbToTypeCAdapter::new(OldMicroUsbPhone);
        assert_eq!(charge_via(&adapter), direct);
    }

    #[test]
    fn test_adapter_output_text() {
        let adapter = MicroUsbToTypeCAdapter::new(OldMicroUsbPhone);
        assert_eq!(
            String::from_utf8(charge_via(&adapter)).unwrap(),
            "Charging phone with MicroUSB port.\n"
        );
    }

    #[test]
    fn test_into_inner_returns_phone() {
        let phone = MicroUsbToTypeCAdapter::new(OldMicroUsbPhone).into_inner();
        let mut out = Vec::new();
        phone.charge_with_micro_usb(&mut out).unwrap();
        assert!(!out.is_empty());
    }
}
