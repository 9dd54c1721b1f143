use compphys::configuration::Configuration;
use compphys::math::quadrature::riemannsum::integrate;
use compphys::value::integrationreport::IntegrationReport;

const CONFIG_PATH: &'static str = "json/config.json";

fn main() {
    let config = Configuration::new();
    config.from_reader(CONFIG_PATH.to_owned()).unwrap();
    for job_name in config.job_names() {
        let job = config.job_manager().get(&job_name).unwrap();
        let integrand = config.integrand_manager().get(job.integrand_name()).unwrap();
        let value = integrate(integrand.as_ref(), job.request()).unwrap();
        let report = IntegrationReport::new(job_name, job.request(), value);
        println!("{}", report);
    }
}
