//! JSON boundary for introspectors running in a separate process.

use crate::descriptor::InterfaceDescriptor;
use crate::error::DescriptorResult;

/// Deserialize an interface descriptor produced by an out-of-process introspector
pub fn from_json(payload: &str) -> DescriptorResult<InterfaceDescriptor> {
    Ok(serde_json::from_str(payload)?)
}

/// Serialize an interface descriptor for transport or fixtures
pub fn to_json(interface: &InterfaceDescriptor) -> DescriptorResult<String> {
    Ok(serde_json::to_string_pretty(interface)?)
}

impl InterfaceDescriptor {
    /// Deserialize a descriptor payload; see [`from_json`]
    pub fn from_json(payload: &str) -> DescriptorResult<Self> {
        from_json(payload)
    }

    /// Serialize this descriptor; see [`to_json`]
    pub fn to_json(&self) -> DescriptorResult<String> {
        to_json(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{MemberDescriptor, ParameterDescriptor};

    #[test]
    fn test_descriptor_round_trip() {
        let interface = InterfaceDescriptor::new("Acme.IWidget", "IWidget").with_members(vec![
            MemberDescriptor::method(
                "Resize",
                "IWidget",
                "void",
                vec![ParameterDescriptor::input("Int32", "width")],
            ),
            MemberDescriptor::property("Title", "IWidget", "String", true, true),
        ]);

        let payload = to_json(&interface).expect("Failed to serialize");
        let restored = from_json(&payload).expect("Failed to deserialize");
        assert_eq!(interface, restored);
    }

    #[test]
    fn test_round_trip_through_associated_functions() {
        let interface = InterfaceDescriptor::new("Acme.IWidget", "IWidget");
        let payload = interface.to_json().expect("Failed to serialize");
        let restored = InterfaceDescriptor::from_json(&payload).expect("Failed to deserialize");
        assert_eq!(interface, restored);
    }

    #[test]
    fn test_malformed_payload_is_an_error() {
        let result = from_json("{ not json");
        assert!(result.is_err());
    }
}
