use tracing::instrument;

use super::dto::{PhoneInputRequest, PhoneInputState};
use crate::domain::phone::service::PhoneFormService;

pub struct NormalizePhoneInputUseCase {
    phone: PhoneFormService,
}

impl NormalizePhoneInputUseCase {
    pub fn new(phone: PhoneFormService) -> Self {
        Self { phone }
    }

    pub fn phone(&self) -> &PhoneFormService {
        &self.phone
    }

    pub fn phone_mut(&mut self) -> &mut PhoneFormService {
        &mut self.phone
    }

    #[instrument(skip(self, request), fields(raw_len = request.raw.len()))]
    pub fn execute(&self, request: PhoneInputRequest) -> PhoneInputState {
        let parsed = self.phone.parse_phone_value(
            &request.raw,
            &request.fallback_dial_code,
            request.detect_dial_code,
        );
        let display = self
            .phone
            .format_phone_local(&parsed.local_digits, &parsed.dial_code);
        let value = self
            .phone
            .build_phone_value(&parsed.dial_code, &parsed.local_digits);
        let is_valid = self.phone.is_valid_phone_number(&value, &parsed.dial_code);

        PhoneInputState {
            dial_code: parsed.dial_code,
            local_digits: parsed.local_digits,
            display,
            value,
            is_valid,
        }
    }
}
