use crate::application::ports::util::ResetTokenGenerator;
use uuid::Uuid;

#[derive(Default, Clone)]
pub struct UuidResetTokenGenerator;

impl ResetTokenGenerator for UuidResetTokenGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
