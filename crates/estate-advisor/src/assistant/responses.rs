pub(super) const BUYING_PROCESS: &str = "Buying a property in Islamabad usually runs in five steps:
1. Shortlist listings by sector, budget, and property type, then schedule viewings.
2. Verify the title: ownership documents, CDA or society records, and outstanding dues.
3. Agree on price and a payment schedule with the seller in writing.
4. Have a property lawyer draft the sale agreement and handle registration and transfer.
5. Pay the balance, take possession, and move utilities and property tax into your name.";

pub(super) const BUYING_TIPS: &str = "Before committing to a purchase:
- Confirm the seller's identity and that the title matches the plot or unit number.
- Check for pending dues, mortgages, or litigation on the property.
- Walk the boundaries and compare measurements with the documents.
- Compare asking prices with recent sales in the same sector.
- Budget for transfer fees, taxes, and maintenance on top of the price.";

pub(super) const BUYING_FINANCE: &str = "Financing options for buyers:
- Conventional and Islamic home financing from commercial banks, typically up to 70% of value.
- Government-backed low-cost housing schemes for first-time buyers.
- Developer installment plans on new projects.
Expect to show income proof, bank statements, and the property's documents when applying.";

pub(super) const RENTING_PROCESS: &str = "Renting usually goes like this:
1. Set a budget and preferred sectors, then shortlist listings.
2. Visit the property and note its condition.
3. Agree rent, advance, and security deposit with the owner.
4. Sign a written tenancy agreement and register it with the local police station.
5. Record meter readings and the property's condition when you move in.";

pub(super) const RENTING_TIPS: &str = "Renting advice:
- Get every term in the written agreement, including who pays for repairs.
- Photograph the property on move-in so the deposit can be settled fairly.
- Ask about water supply, backup power, and parking before signing.
- Keep receipts for every rent payment.";

pub(super) const RENTING_DOCUMENTS: &str = "Documents usually needed to rent:
- CNIC copies for the tenant and the owner.
- A signed tenancy agreement on stamp paper.
- Police registration of the tenancy.
- Employment letter or proof of income, if the owner asks for it.";

pub(super) const INVESTMENT_ADVICE: &str = "General investment guidance:
- Favor established sectors for steady rental income and new developments for growth.
- Buy only clear-title property with approved plans.
- Keep a horizon of at least three to five years.
- Spread capital across plots and built units rather than a single asset.";

pub(super) const INVESTMENT_RETURNS: &str = "Typical returns vary by asset:
- Residential rentals in central sectors: roughly 3-5% yearly rental yield.
- Commercial units: higher yields, usually 6-8%, with more vacancy risk.
- Plots in developing areas: no rent, returns come from appreciation over several years.";

pub(super) const INVESTMENT_HOTSPOTS: &str = "Areas investors are watching:
- B-17 and the D-sectors, where infrastructure is still arriving.
- Bahria Town and DHA phases with ongoing development.
- Park Road and Chak Shahzad for farmhouse and plot buyers.
- Blue Area and its extensions for commercial space.";

pub(super) const RATES_F_SECTORS: &str = "F-sectors (F-6 to F-11) are among the most expensive \
addresses in the city. Houses command premium prices per marla and rents follow suit. Check recent \
listings in the exact sector for current figures.";

pub(super) const RATES_E_SECTORS: &str = "E-sectors (E-7, E-11) span very high-end houses in \
E-7 and more affordable apartments in E-11. Prices differ widely between them, so compare within \
the sector.";

pub(super) const RATES_BAHRIA_TOWN: &str = "Bahria Town rates depend heavily on the phase. \
Older, developed phases trade higher per marla than newer ones still under construction.";

pub(super) const RATES_DHA: &str = "DHA rates vary by phase and plot size. Developed phases with \
possession carry a clear premium over file-based or newly launched phases.";

pub(super) const TRENDS_CURRENT: &str = "Current market trends:
- Demand is strongest for ready-to-move houses in developed sectors.
- Apartment living is gaining ground as plot prices climb.
- Rental demand remains steady around universities and offices.";

pub(super) const TRENDS_FUTURE: &str = "Looking ahead:
- New road links should lift prices along the expressway corridors.
- Planned sectors on the city's edge are expected to absorb most new housing.
- Commercial space near transit routes is likely to see rising demand.";

pub(super) const FALLBACK: &str = "I'm not sure about that. Try asking about buying, renting, \
investment advice, or property rates in Islamabad. You can also ask about current market trends \
or specific areas.";
