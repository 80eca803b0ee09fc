#[cfg(test)]
mod tests {
    use anchor_lang::prelude::*;

    use crate::constants::*;
    use crate::error::TipperError;
    use crate::state::*;
    use crate::test::ledger::assert_error;
    use crate::utils::encode_text;

    fn open_tipper(max_balance: u64) -> Tipper {
        let mut tipper = Tipper::default();
        tipper
            .initialize(Pubkey::new_unique(), "Ackee Final Project", max_balance, 254)
            .expect("initialize should succeed");
        tipper
    }

    #[test]
    fn test_initialize_sets_open_state() {
        let authority = Pubkey::new_unique();
        let mut tipper = Tipper::default();
        tipper
            .initialize(authority, "Ackee Final Project", 100_000_000_000, 253)
            .unwrap();

        assert_eq!(tipper.authority, authority);
        assert_eq!(tipper.target_name(), "Ackee Final Project");
        assert_eq!(tipper.target_name_len, 19);
        assert_eq!(&tipper.target_name[19..], &[0u8; 13]);
        assert_eq!(tipper.balance, 0);
        assert_eq!(tipper.max_balance, 100_000_000_000);
        assert_eq!(tipper.state, State::Open);
        assert_eq!(tipper.bump, 253);
    }

    #[test]
    fn test_initialize_counts_utf8_bytes() {
        let mut tipper = Tipper::default();
        tipper
            .initialize(Pubkey::new_unique(), "Café ☕", 10, 255)
            .unwrap();

        assert_eq!(tipper.target_name_len as usize, "Café ☕".len());
        assert_eq!(tipper.target_name_len, 9);
        assert_eq!(tipper.target_name(), "Café ☕");
    }

    #[test]
    fn test_initialize_rejects_long_target_name() {
        let mut tipper = Tipper::default();
        let name = "x".repeat(TARGET_NAME_LENGTH + 1);

        assert_error(
            tipper.initialize(Pubkey::new_unique(), &name, 10, 255),
            TipperError::TargetNameTooLong,
        );
        assert_eq!(tipper.state, State::Uninitialized);
        assert_eq!(tipper.target_name_len, 0);
    }

    #[test]
    fn test_deposit_below_max_stays_open() {
        let mut tipper = open_tipper(100);

        assert!(!tipper.deposit(40).unwrap());
        assert_eq!(tipper.balance, 40);
        assert!(tipper.is_open());
        assert_eq!(tipper.remaining_capacity(), 60);
    }

    #[test]
    fn test_deposit_reaching_max_closes() {
        let mut tipper = open_tipper(100);

        assert!(!tipper.deposit(99).unwrap());
        assert!(tipper.deposit(1).unwrap());
        assert_eq!(tipper.balance, 100);
        assert_eq!(tipper.state, State::Closed);
    }

    #[test]
    fn test_deposit_overshoot_is_not_clamped() {
        let mut tipper = open_tipper(100_000_000_000);

        tipper.deposit(1_000_000_000).unwrap();
        assert!(tipper.deposit(100_000_000_000).unwrap());

        assert_eq!(tipper.balance, 101_000_000_000);
        assert_eq!(tipper.state, State::Closed);
        assert_eq!(tipper.remaining_capacity(), 0);
    }

    #[test]
    fn test_deposit_zero_amount_fails() {
        let mut tipper = open_tipper(100);
        tipper.deposit(10).unwrap();

        assert_error(tipper.deposit(0), TipperError::InvalidAmount);
        assert_eq!(tipper.balance, 10);
        assert!(tipper.is_open());
    }

    #[test]
    fn test_deposit_after_close_fails() {
        let mut tipper = open_tipper(100);
        tipper.deposit(150).unwrap();

        assert_error(tipper.deposit(100), TipperError::TipperClosed);
        assert_eq!(tipper.balance, 150);
        assert_eq!(tipper.state, State::Closed);
    }

    #[test]
    fn test_deposit_into_uninitialized_fails() {
        let mut tipper = Tipper::default();

        assert_error(tipper.deposit(1), TipperError::TipperClosed);
        assert_eq!(tipper.balance, 0);
    }

    #[test]
    fn test_deposit_overflow_fails() {
        let mut tipper = open_tipper(u64::MAX);
        tipper.deposit(u64::MAX - 1).unwrap();

        assert_error(tipper.deposit(2), TipperError::CapacityOverflow);
        assert_eq!(tipper.balance, u64::MAX - 1);
        assert!(tipper.is_open());
    }

    #[test]
    fn test_zero_max_balance_closes_on_first_tip() {
        let mut tipper = open_tipper(0);

        assert!(tipper.is_open());
        assert!(tipper.deposit(1).unwrap());
        assert_eq!(tipper.state, State::Closed);
    }

    #[test]
    fn test_take_balance_zeroes() {
        let mut tipper = open_tipper(100);
        tipper.deposit(70).unwrap();

        assert_eq!(tipper.take_balance(), 70);
        assert_eq!(tipper.balance, 0);
        assert_eq!(tipper.take_balance(), 0);
    }

    #[test]
    fn test_is_authority() {
        let tipper = open_tipper(100);

        let authority = tipper.authority;

        assert!(tipper.is_authority(&authority));
        assert!(!tipper.is_authority(&Pubkey::new_unique()));
    }

    #[test]
    fn test_tip_receipt_fields() {
        let author = Pubkey::new_unique();
        let parent = Pubkey::new_unique();
        let (message, len) = encode_text::<MESSAGE_LENGTH>("Thank you for your hard work!").unwrap();

        let tip = Tip::new(author, parent, 1_000_000_000, message, len, 251);

        assert_eq!(tip.author, author);
        assert_eq!(tip.parent_tipper, parent);
        assert_eq!(tip.amount, 1_000_000_000);
        assert_eq!(tip.message(), "Thank you for your hard work!");
        assert_eq!(tip.message_len, 29);
        assert_eq!(tip.bump, 251);
    }

    #[test]
    fn test_state_byte_values() {
        let encode = |state: State| {
            let mut buf = Vec::new();
            state.serialize(&mut buf).unwrap();
            buf
        };

        assert_eq!(encode(State::Uninitialized), vec![0]);
        assert_eq!(encode(State::Open), vec![1]);
        assert_eq!(encode(State::Closed), vec![2]);
    }

    #[test]
    fn test_account_sizes_match_serialized_layout() {
        let mut tipper_data = Vec::new();
        open_tipper(100).try_serialize(&mut tipper_data).unwrap();
        assert_eq!(tipper_data.len(), Tipper::LEN);
        assert_eq!(Tipper::LEN, 8 + 83);

        let mut tip_data = Vec::new();
        Tip::default().try_serialize(&mut tip_data).unwrap();
        assert_eq!(tip_data.len(), Tip::LEN);
        assert_eq!(Tip::LEN, 8 + 106);
    }

    #[test]
    fn test_tipper_survives_account_round_trip() {
        let mut tipper = open_tipper(500);
        tipper.deposit(600).unwrap();

        let mut data = Vec::new();
        tipper.try_serialize(&mut data).unwrap();
        let decoded = Tipper::try_deserialize(&mut data.as_slice()).unwrap();

        assert_eq!(decoded.authority, tipper.authority);
        assert_eq!(decoded.target_name(), "Ackee Final Project");
        assert_eq!(decoded.balance, 600);
        assert_eq!(decoded.state, State::Closed);
    }
}
