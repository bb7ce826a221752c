use super::{repository::EnquiryRepository, utils::validate_enquiry};
use crate::api::{ApiClient, ApiError, NewEnquiry};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct EnquiryFormViewModel {
    pub name: RwSignal<String>,
    pub mobile: RwSignal<String>,
    pub email: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
    pub submitted: RwSignal<bool>,
    pub submit_action: Action<NewEnquiry, Result<(), ApiError>>,
}

impl EnquiryFormViewModel {
    pub fn submit(&self) -> bool {
        if self.submit_action.pending().get_untracked() {
            return false;
        }
        match validate_enquiry(
            &self.name.get_untracked(),
            &self.mobile.get_untracked(),
            &self.email.get_untracked(),
        ) {
            Ok(enquiry) => {
                self.error.set(None);
                self.submitted.set(false);
                self.submit_action.dispatch(enquiry);
                true
            }
            Err(err) => {
                self.error.set(Some(err));
                false
            }
        }
    }
}

pub fn use_enquiry_form_view_model() -> EnquiryFormViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = EnquiryRepository::new_with_client(Rc::new(api));

    let name = create_rw_signal(String::new());
    let mobile = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let submitted = create_rw_signal(false);

    let submit_action = create_action(move |enquiry: &NewEnquiry| {
        let repo = repo.clone();
        let enquiry = enquiry.clone();
        async move {
            let result = repo.submit(&enquiry).await;
            match &result {
                Ok(()) => {
                    log::info!("Enquiry submitted");
                    name.try_set(String::new());
                    mobile.try_set(String::new());
                    email.try_set(String::new());
                    submitted.try_set(true);
                }
                Err(err) => {
                    log::warn!("Enquiry submission failed: {} ({})", err, err.code);
                    error.try_set(Some(err.clone()));
                }
            }
            result
        }
    });

    EnquiryFormViewModel {
        name,
        mobile,
        email,
        error,
        submitted,
        submit_action,
    }
}
