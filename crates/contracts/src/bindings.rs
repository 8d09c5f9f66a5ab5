use {
    alloy::sol_types::SolConstructor,
    alloy_primitives::Bytes,
};

/// Artifact name of the Validator contract.
pub const VALIDATOR: &str = "Validator";
/// Artifact name of the Aggregator contract. Both Aggregator bindings below
/// are compiled from the same artifact.
pub const AGGREGATOR: &str = "Aggregator";

alloy::sol! {
    #[allow(missing_docs)]
    contract Validator {
        constructor(address token);

        function setAggregatorAddress(address aggregator) external;
    }
}

alloy::sol! {
    #[allow(missing_docs)]
    contract Aggregator {
        constructor(address validator);
    }
}

alloy::sol! {
    /// Aggregator revision that additionally stores the token it aggregates.
    #[allow(missing_docs)]
    contract LinkedAggregator {
        constructor(address validator, address token);
    }
}

/// Builds the payload of a contract creation transaction: the creation
/// bytecode followed by the ABI encoded constructor arguments.
pub fn creation_code(bytecode: &Bytes, constructor: &impl SolConstructor) -> Bytes {
    let mut code = bytecode.to_vec();
    code.extend(constructor.abi_encode());
    code.into()
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        alloy::sol_types::SolCall,
        alloy_primitives::{address, keccak256},
    };

    #[test]
    fn appends_constructor_arguments() {
        let bytecode = Bytes::from_static(&[0x60, 0x80, 0x60, 0x40]);
        let token = address!("0x1111111111111111111111111111111111111111");

        let code = creation_code(&bytecode, &Validator::constructorCall { token });

        assert_eq!(code.len(), 4 + 32);
        assert_eq!(&code[..4], &bytecode[..]);
        assert_eq!(&code[4..16], &[0u8; 12]);
        assert_eq!(&code[16..], token.as_slice());
    }

    #[test]
    fn linked_aggregator_encodes_validator_then_token() {
        let validator = address!("0x2222222222222222222222222222222222222222");
        let token = address!("0x3333333333333333333333333333333333333333");

        let code = creation_code(
            &Bytes::new(),
            &LinkedAggregator::constructorCall { validator, token },
        );

        assert_eq!(code.len(), 64);
        assert_eq!(&code[12..32], validator.as_slice());
        assert_eq!(&code[44..64], token.as_slice());
    }

    #[test]
    fn aggregator_link_call() {
        let aggregator = address!("0x4444444444444444444444444444444444444444");
        let call = Validator::setAggregatorAddressCall { aggregator };

        assert_eq!(
            Validator::setAggregatorAddressCall::SIGNATURE,
            "setAggregatorAddress(address)"
        );
        let calldata = call.abi_encode();
        assert_eq!(
            &calldata[..4],
            &keccak256("setAggregatorAddress(address)")[..4]
        );
        assert_eq!(&calldata[16..], aggregator.as_slice());
    }
}
