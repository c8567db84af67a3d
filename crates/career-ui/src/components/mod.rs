pub mod company_renderer;
pub mod job_form;
pub mod job_list;
pub mod live_link;
pub mod nav;
pub mod toast;
