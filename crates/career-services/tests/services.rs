mod common;

use career_services::{ApiError, CompanyService, JobsService};
use career_types::{
    Alignment, Branding, CompanyCreate, CompanyUpdate, Header, JobCreate, JobFilters, JobType,
    JobUpdate, PageContent, PageDraft, Section, SectionEdit,
};
use common::FakeBackend;

fn acme() -> CompanyCreate {
    CompanyCreate {
        company_name: "Acme".into(),
        branding: Branding {
            primary_color: "#123456".into(),
            logo_url: Some("https://acme.test/logo.png".into()),
        },
        page_content: PageContent {
            header: Header {
                title: "Build with us".into(),
                subtitle: "Rockets, mostly".into(),
            },
            about_sections: vec![
                Section {
                    title: "Culture".into(),
                    description: "Kind and curious".into(),
                    image_url: None,
                    alignment: Alignment::Left,
                },
                Section {
                    title: "Benefits".into(),
                    description: "Four-day weeks".into(),
                    image_url: Some("https://acme.test/b.png".into()),
                    alignment: Alignment::Right,
                },
            ],
        },
    }
}

fn job(title: &str, location: &str, job_type: JobType) -> JobCreate {
    JobCreate {
        title: title.into(),
        location: location.into(),
        description: "A role worth describing.".into(),
        job_type,
        min_salary: Some(50_000),
        max_salary: Some(80_000),
        currency: "USD".into(),
    }
}

#[tokio::test]
async fn published_content_round_trips_through_preview() {
    let fake = FakeBackend::spawn().await;
    let gateway = fake.signed_in();
    let companies = CompanyService::new(&gateway);

    let payload = acme();
    let created = companies.create(&payload).await.unwrap();
    let fetched = companies.for_edit(&created.slug).await.unwrap();

    assert_eq!(fetched.branding, payload.branding);
    assert_eq!(fetched.page_content, payload.page_content);
}

#[tokio::test]
async fn create_then_retitle_then_refetch() {
    let fake = FakeBackend::spawn().await;
    let gateway = fake.signed_in();
    let companies = CompanyService::new(&gateway);

    let created = companies.create(&acme()).await.unwrap();
    assert_eq!(created.slug, "acme");

    let mut draft = PageDraft::from_company(&created);
    draft.set_header_title("We hire".into());
    companies
        .update(&created.slug, &draft.to_update())
        .await
        .unwrap();

    let fetched = companies.for_edit(&created.slug).await.unwrap();
    assert_eq!(fetched.page_content.header.title, "We hire");
    assert_eq!(fetched.page_content.about_sections.len(), 2);
}

#[tokio::test]
async fn server_assigns_distinct_slugs() {
    let fake = FakeBackend::spawn().await;
    let gateway = fake.signed_in();
    let companies = CompanyService::new(&gateway);

    let first = companies.create(&acme()).await.unwrap();
    let second = companies.create(&acme()).await.unwrap();
    assert_ne!(first.slug, second.slug);
    assert_eq!(companies.list_mine().await.unwrap().len(), 2);
}

#[tokio::test]
async fn section_removal_is_published_in_order() {
    let fake = FakeBackend::spawn().await;
    let gateway = fake.signed_in();
    let companies = CompanyService::new(&gateway);

    let created = companies.create(&acme()).await.unwrap();
    let mut draft = PageDraft::from_company(&created);
    let added = draft.add_section();
    draft.update_section(added, SectionEdit::Title("Offices".into()));
    draft.remove_section(0);

    let updated = companies
        .update(&created.slug, &draft.to_update())
        .await
        .unwrap();
    let titles: Vec<_> = updated
        .page_content
        .about_sections
        .iter()
        .map(|s| s.title.as_str())
        .collect();
    assert_eq!(titles, vec!["Benefits", "Offices"]);
}

#[tokio::test]
async fn partial_update_leaves_branding_alone() {
    let fake = FakeBackend::spawn().await;
    let gateway = fake.signed_in();
    let companies = CompanyService::new(&gateway);

    let created = companies.create(&acme()).await.unwrap();
    let update = CompanyUpdate {
        branding: None,
        page_content: Some(PageContent::default()),
    };
    let updated = companies.update(&created.slug, &update).await.unwrap();
    assert_eq!(updated.branding, created.branding);
    assert!(updated.page_content.about_sections.is_empty());
}

#[tokio::test]
async fn public_page_needs_no_session() {
    let fake = FakeBackend::spawn().await;
    let created = CompanyService::new(&fake.signed_in())
        .create(&acme())
        .await
        .unwrap();

    let anonymous = fake.anonymous();
    let public = CompanyService::new(&anonymous)
        .public_page(&created.slug)
        .await
        .unwrap();
    assert_eq!(public.page_content, created.page_content);

    let editor = CompanyService::new(&anonymous).for_edit(&created.slug).await;
    assert_eq!(editor, Err(ApiError::Unauthorized));
}

#[tokio::test]
async fn empty_company_lists_no_jobs() {
    let fake = FakeBackend::spawn().await;
    let created = CompanyService::new(&fake.signed_in())
        .create(&acme())
        .await
        .unwrap();

    let anonymous = fake.anonymous();
    let jobs = JobsService::new(&anonymous)
        .list(&created.slug, &JobFilters::default())
        .await
        .unwrap();
    assert!(jobs.is_empty());
}

#[tokio::test]
async fn filters_narrow_conjunctively() {
    let fake = FakeBackend::spawn().await;
    let gateway = fake.signed_in();
    let slug = CompanyService::new(&gateway)
        .create(&acme())
        .await
        .unwrap()
        .slug;
    let jobs = JobsService::new(&gateway);

    for (title, location, job_type) in [
        ("Senior Developer", "Remote", JobType::FullTime),
        ("DevRel", "London", JobType::FullTime),
        ("Recruiter", "remote", JobType::PartTime),
        ("Web DEVELOPER", "Fully REMOTE", JobType::Contract),
    ] {
        jobs.create(&slug, &job(title, location, job_type)).await.unwrap();
    }

    let filters = JobFilters {
        search: Some("dev".into()),
        location: Some("remote".into()),
        job_type: None,
    };
    let mut titles: Vec<String> = jobs
        .list(&slug, &filters)
        .await
        .unwrap()
        .into_iter()
        .map(|j| j.title)
        .collect();
    titles.sort();
    assert_eq!(titles, vec!["Senior Developer", "Web DEVELOPER"]);

    let contracts = JobFilters {
        job_type: Some(JobType::Contract),
        ..filters
    };
    let listed = jobs.list(&slug, &contracts).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "Web DEVELOPER");
}

#[tokio::test]
async fn toggling_twice_restores_the_job() {
    let fake = FakeBackend::spawn().await;
    let gateway = fake.signed_in();
    let slug = CompanyService::new(&gateway)
        .create(&acme())
        .await
        .unwrap()
        .slug;
    let jobs = JobsService::new(&gateway);

    let original = jobs
        .create(&slug, &job("Engineer", "Remote", JobType::FullTime))
        .await
        .unwrap();
    assert!(original.is_active);

    let off = jobs.toggle(&slug, original.id, false).await.unwrap();
    assert!(!off.is_active);
    assert_eq!(
        career_types::Job {
            is_active: true,
            ..off.clone()
        },
        original
    );

    let on = jobs.toggle(&slug, original.id, true).await.unwrap();
    assert_eq!(on, original);
}

#[tokio::test]
async fn job_update_get_and_delete() {
    let fake = FakeBackend::spawn().await;
    let gateway = fake.signed_in();
    let slug = CompanyService::new(&gateway)
        .create(&acme())
        .await
        .unwrap()
        .slug;
    let jobs = JobsService::new(&gateway);

    let created = jobs
        .create(&slug, &job("Engineer", "Remote", JobType::FullTime))
        .await
        .unwrap();
    let update = JobUpdate {
        title: Some("Staff Engineer".into()),
        ..Default::default()
    };
    let updated = jobs.update(&slug, created.id, &update).await.unwrap();
    assert_eq!(updated.title, "Staff Engineer");
    assert_eq!(updated.location, "Remote");

    let fetched = jobs.get(&slug, created.id).await.unwrap();
    assert_eq!(fetched, updated);

    jobs.delete(&slug, created.id).await.unwrap();
    assert!(matches!(
        jobs.get(&slug, created.id).await,
        Err(ApiError::NotFound(_))
    ));
}

#[tokio::test]
async fn job_writes_require_a_session() {
    let fake = FakeBackend::spawn().await;
    let slug = CompanyService::new(&fake.signed_in())
        .create(&acme())
        .await
        .unwrap()
        .slug;

    let anonymous = fake.anonymous();
    let result = JobsService::new(&anonymous)
        .create(&slug, &job("Engineer", "Remote", JobType::FullTime))
        .await;
    assert_eq!(result, Err(ApiError::Unauthorized));
}
