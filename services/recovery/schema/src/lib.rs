pub mod recovery_codes;
